use record_derive::record;
use sea_orm::entity::prelude::*;

/// Directed "see also" link between two products. Both ends reference
/// `products`, so each relation is named explicitly.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "related_products")]
pub struct Model {
    #[sea_orm(indexed)]
    pub product_id: Uuid,
    #[sea_orm(indexed)]
    pub related_product_id: Uuid,
    #[sea_orm(
        belongs_to,
        relation_enum = "Product",
        from = "product_id",
        to = "id",
        on_delete = "Cascade"
    )]
    pub product: HasOne<super::product::Entity>,
    #[sea_orm(
        belongs_to,
        relation_enum = "RelatedProduct",
        from = "related_product_id",
        to = "id",
        on_delete = "Cascade"
    )]
    pub related_product: HasOne<super::product::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
