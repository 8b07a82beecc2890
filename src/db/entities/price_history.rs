use record_derive::record;
use sea_orm::entity::prelude::*;

/// Append-only price log; `is_uptodate` marks the current price of a product.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "price_histories")]
pub struct Model {
    #[sea_orm(indexed)]
    pub product_id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub price: Decimal,
    #[sea_orm(default_value = true)]
    pub is_uptodate: bool,
    #[sea_orm(belongs_to, from = "product_id", to = "id", on_delete = "Cascade")]
    pub product: HasOne<super::product::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
