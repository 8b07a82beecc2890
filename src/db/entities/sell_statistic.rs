use record_derive::record;
use sea_orm::entity::prelude::*;

/// Running sales aggregate per (brand, sub category). The unique key covers
/// rows with a sub category; the NULL bucket relies on the brand row lock
/// taken by every writer.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "sell_statistics")]
pub struct Model {
    #[sea_orm(indexed, unique_key = "brand_sub_category")]
    pub brand_id: Uuid,
    #[sea_orm(unique_key = "brand_sub_category")]
    pub sub_category_id: Option<Uuid>,
    #[sea_orm(default_value = 0)]
    pub sell_count: i32,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub sell_total: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub average_price: Decimal,
    #[sea_orm(belongs_to, from = "brand_id", to = "id", on_delete = "Cascade")]
    pub brand: HasOne<super::brand::Entity>,
    #[sea_orm(belongs_to, from = "sub_category_id", to = "id", on_delete = "SetNull")]
    pub sub_category: HasOne<super::sub_category::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
