use record_derive::record;
use sea_orm::entity::prelude::*;

/// Free-form status row. There is no fixed set of statuses and no transition graph.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "product_statuses")]
pub struct Model {
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub status: String,
    #[sea_orm(has_many)]
    pub products: HasMany<super::product::Entity>,
    #[sea_orm(has_many)]
    pub logs: HasMany<super::product_status_log::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
