use record_derive::record;
use sea_orm::entity::prelude::*;

/// Main categories a brand is sold under.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "brand_categories")]
pub struct Model {
    #[sea_orm(indexed)]
    pub brand_id: Uuid,
    #[sea_orm(indexed)]
    pub main_category_id: Uuid,
    #[sea_orm(belongs_to, from = "brand_id", to = "id", on_delete = "Cascade")]
    pub brand: HasOne<super::brand::Entity>,
    #[sea_orm(belongs_to, from = "main_category_id", to = "id", on_delete = "Cascade")]
    pub main_category: HasOne<super::main_category::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
