use record_derive::record;
use sea_orm::entity::prelude::*;

/// Condition grade (S, A, B, ...).
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "product_grades")]
pub struct Model {
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub grade: String,
    #[sea_orm(has_many)]
    pub products: HasMany<super::product::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
