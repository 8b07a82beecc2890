use record_derive::record;
use sea_orm::entity::prelude::*;

/// Search keyword attached to products.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "keywords")]
pub struct Model {
    #[sea_orm(unique, column_type = "String(StringLen::N(50))")]
    pub name: String,
    #[sea_orm(has_many)]
    pub product_keywords: HasMany<super::product_keyword::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
