use record_derive::record;
use sea_orm::entity::prelude::*;

/// Top level of the two-level category tree.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "main_categories")]
pub struct Model {
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
    #[sea_orm(has_many)]
    pub sub_categories: HasMany<super::sub_category::Entity>,
    #[sea_orm(has_many)]
    pub brand_categories: HasMany<super::brand_category::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
