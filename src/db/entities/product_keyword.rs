use record_derive::record;
use sea_orm::entity::prelude::*;

#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "product_keywords")]
pub struct Model {
    #[sea_orm(indexed)]
    pub product_id: Uuid,
    #[sea_orm(indexed)]
    pub keyword_id: Uuid,
    #[sea_orm(belongs_to, from = "product_id", to = "id", on_delete = "Cascade")]
    pub product: HasOne<super::product::Entity>,
    #[sea_orm(belongs_to, from = "keyword_id", to = "id", on_delete = "Cascade")]
    pub keyword: HasOne<super::keyword::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
