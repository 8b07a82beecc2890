use record_derive::record;
use sea_orm::entity::prelude::*;

/// Pickup window offered to sellers, e.g. "10:00-12:00".
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "pickup_times")]
pub struct Model {
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub time_slot: String,
    #[sea_orm(has_many)]
    pub consignments: HasMany<super::consignment::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
