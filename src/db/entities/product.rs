use record_derive::record;
use sea_orm::entity::prelude::*;

/// A consigned item. `brand_id` is required when a product is created, but the
/// column is nullable so removing a brand leaves its products in place.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub name: String,
    #[sea_orm(indexed)]
    pub brand_id: Option<Uuid>,
    #[sea_orm(indexed)]
    pub seller_id: Option<Uuid>,
    pub product_grade_id: Option<Uuid>,
    #[sea_orm(indexed)]
    pub status_id: Option<Uuid>,
    pub sell_category_id: Option<Uuid>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub price: Decimal,
    #[sea_orm(default_value = 0)]
    pub view_count: i32,
    #[sea_orm(default_value = 0)]
    pub like_count: i32,
    #[sea_orm(default_value = false)]
    pub is_sold: bool,
    #[sea_orm(default_value = false)]
    pub is_deleted: bool,
    #[sea_orm(belongs_to, from = "brand_id", to = "id", on_delete = "SetNull")]
    pub brand: HasOne<super::brand::Entity>,
    #[sea_orm(belongs_to, from = "seller_id", to = "id", on_delete = "SetNull")]
    pub seller: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "product_grade_id", to = "id", on_delete = "SetNull")]
    pub product_grade: HasOne<super::product_grade::Entity>,
    #[sea_orm(belongs_to, from = "status_id", to = "id", on_delete = "SetNull")]
    pub status: HasOne<super::product_status::Entity>,
    #[sea_orm(belongs_to, from = "sell_category_id", to = "id", on_delete = "SetNull")]
    pub sell_category: HasOne<super::sell_category::Entity>,
    #[sea_orm(has_one)]
    pub detail: HasOne<super::product_detail::Entity>,
    #[sea_orm(has_many)]
    pub status_logs: HasMany<super::product_status_log::Entity>,
    #[sea_orm(has_many)]
    pub price_histories: HasMany<super::price_history::Entity>,
    #[sea_orm(has_many)]
    pub images: HasMany<super::image::Entity>,
    #[sea_orm(has_many)]
    pub product_tags: HasMany<super::product_tag::Entity>,
    #[sea_orm(has_many)]
    pub product_keywords: HasMany<super::product_keyword::Entity>,
    #[sea_orm(has_many)]
    pub product_categories: HasMany<super::product_category::Entity>,
    #[sea_orm(has_many)]
    pub consignments: HasMany<super::consignment::Entity>,
    #[sea_orm(has_many)]
    pub seller_reviews: HasMany<super::seller_review::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
