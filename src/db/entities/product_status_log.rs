use record_derive::record;
use sea_orm::entity::prelude::*;

/// Append-only status history. `created_at` is the transition time; only the
/// latest entry of a product keeps `is_valid` set.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "product_status_logs")]
pub struct Model {
    #[sea_orm(indexed)]
    pub product_id: Uuid,
    pub status_id: Option<Uuid>,
    #[sea_orm(default_value = true)]
    pub is_valid: bool,
    #[sea_orm(belongs_to, from = "product_id", to = "id", on_delete = "Cascade")]
    pub product: HasOne<super::product::Entity>,
    #[sea_orm(belongs_to, from = "status_id", to = "id", on_delete = "SetNull")]
    pub status: HasOne<super::product_status::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
