use record_derive::record;
use sea_orm::entity::prelude::*;

#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "sub_categories")]
pub struct Model {
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
    #[sea_orm(indexed)]
    pub main_category_id: Uuid,
    #[sea_orm(belongs_to, from = "main_category_id", to = "id", on_delete = "Cascade")]
    pub main_category: HasOne<super::main_category::Entity>,
    #[sea_orm(has_many)]
    pub product_categories: HasMany<super::product_category::Entity>,
    #[sea_orm(has_many)]
    pub sell_statistics: HasMany<super::sell_statistic::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
