use chrono::Utc;
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

/// Implemented by `#[record]` for the entity's `Entity`.
pub trait HasCreatedColumn: sea_orm::EntityTrait {
    fn created_column() -> Self::Column;
}

/// Implemented by `#[record]` for the entity's `ActiveModel`.
pub trait RecordActiveModel {
    fn assign_id(&mut self, id: Uuid);
    fn stamp_created(&mut self, ts: DateTimeWithTimeZone);
    fn stamp_modified(&mut self, ts: DateTimeWithTimeZone);
}

pub fn now() -> DateTimeWithTimeZone {
    Utc::now().fixed_offset()
}

/// Fresh id, creation time and modification times, all from one clock reading.
pub fn stamp_new<A: RecordActiveModel>(active: &mut A) {
    let ts = now();
    active.assign_id(Uuid::new_v4());
    active.stamp_created(ts);
    active.stamp_modified(ts);
}

pub fn stamp_save<A: RecordActiveModel>(active: &mut A) {
    active.stamp_modified(now());
}
