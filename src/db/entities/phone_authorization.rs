use record_derive::record;
use sea_orm::entity::prelude::*;

#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "phone_authorizations")]
pub struct Model {
    #[sea_orm(indexed, column_type = "String(StringLen::N(20))")]
    pub phone_number: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub authorization_number: String,
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.phone_number)
    }
}
