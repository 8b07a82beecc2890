use record_derive::record;
use sea_orm::entity::prelude::*;

/// Social login provider (kakao, naver, apple, ...).
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "social_platforms")]
pub struct Model {
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub platform: String,
    #[sea_orm(has_many)]
    pub users: HasMany<super::user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
