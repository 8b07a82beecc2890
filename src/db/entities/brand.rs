use record_derive::record;
use sea_orm::entity::prelude::*;

#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(unique, column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub korean_name: String,
    #[sea_orm(column_type = "String(StringLen::N(2000))")]
    pub image_url: String,
    #[sea_orm(has_many)]
    pub products: HasMany<super::product::Entity>,
    #[sea_orm(has_many)]
    pub brand_categories: HasMany<super::brand_category::Entity>,
    #[sea_orm(has_many)]
    pub followers: HasMany<super::user_brand::Entity>,
    #[sea_orm(has_many)]
    pub sell_statistics: HasMany<super::sell_statistic::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
