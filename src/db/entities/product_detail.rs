use record_derive::record;
use sea_orm::entity::prelude::*;

#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "product_details")]
pub struct Model {
    #[sea_orm(unique)]
    pub product_id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub size: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub color: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub material: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(belongs_to, from = "product_id", to = "id", on_delete = "Cascade")]
    pub product: HasOne<super::product::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
