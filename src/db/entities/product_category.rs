use record_derive::record;
use sea_orm::entity::prelude::*;

/// Join table: a product may sit in several sub categories.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "product_categories")]
pub struct Model {
    #[sea_orm(indexed)]
    pub product_id: Uuid,
    #[sea_orm(indexed)]
    pub sub_category_id: Uuid,
    #[sea_orm(belongs_to, from = "product_id", to = "id", on_delete = "Cascade")]
    pub product: HasOne<super::product::Entity>,
    #[sea_orm(belongs_to, from = "sub_category_id", to = "id", on_delete = "Cascade")]
    pub sub_category: HasOne<super::sub_category::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
