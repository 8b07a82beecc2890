use record_derive::record;
use sea_orm::entity::prelude::*;

#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "seller_reviews")]
pub struct Model {
    #[sea_orm(indexed)]
    pub seller_id: Uuid,
    pub reviewer_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    pub rating: i16,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(
        belongs_to,
        relation_enum = "Seller",
        from = "seller_id",
        to = "id",
        on_delete = "Cascade"
    )]
    pub seller: HasOne<super::user::Entity>,
    #[sea_orm(
        belongs_to,
        relation_enum = "Reviewer",
        from = "reviewer_id",
        to = "id",
        on_delete = "SetNull"
    )]
    pub reviewer: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "product_id", to = "id", on_delete = "SetNull")]
    pub product: HasOne<super::product::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
