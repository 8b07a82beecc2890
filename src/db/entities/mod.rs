#[allow(unused_imports)]
pub mod prelude {
    pub use super::address::Entity as Address;
    pub use super::brand::Entity as Brand;
    pub use super::brand_category::Entity as BrandCategory;
    pub use super::consignment::Entity as Consignment;
    pub use super::image::Entity as Image;
    pub use super::keyword::Entity as Keyword;
    pub use super::main_category::Entity as MainCategory;
    pub use super::phone_authorization::Entity as PhoneAuthorization;
    pub use super::pickup_time::Entity as PickupTime;
    pub use super::price_history::Entity as PriceHistory;
    pub use super::product::Entity as Product;
    pub use super::product_category::Entity as ProductCategory;
    pub use super::product_detail::Entity as ProductDetail;
    pub use super::product_grade::Entity as ProductGrade;
    pub use super::product_keyword::Entity as ProductKeyword;
    pub use super::product_status::Entity as ProductStatus;
    pub use super::product_status_log::Entity as ProductStatusLog;
    pub use super::product_tag::Entity as ProductTag;
    pub use super::related_product::Entity as RelatedProduct;
    pub use super::sell_category::Entity as SellCategory;
    pub use super::sell_statistic::Entity as SellStatistic;
    pub use super::seller_review::Entity as SellerReview;
    pub use super::social_platform::Entity as SocialPlatform;
    pub use super::sub_category::Entity as SubCategory;
    pub use super::tag::Entity as Tag;
    pub use super::user::Entity as User;
    pub use super::user_brand::Entity as UserBrand;
    pub use super::user_grade::Entity as UserGrade;
}

// identity
pub mod address;
pub mod phone_authorization;
pub mod social_platform;
pub mod user;
pub mod user_brand;
pub mod user_grade;

// taxonomy
pub mod brand;
pub mod brand_category;
pub mod main_category;
pub mod product_category;
pub mod sell_category;
pub mod sub_category;

// catalog
pub mod image;
pub mod keyword;
pub mod price_history;
pub mod product;
pub mod product_detail;
pub mod product_grade;
pub mod product_keyword;
pub mod product_status;
pub mod product_status_log;
pub mod product_tag;
pub mod related_product;
pub mod tag;

// logistics
pub mod consignment;
pub mod pickup_time;

// analytics
pub mod sell_statistic;
pub mod seller_review;

#[cfg(test)]
mod tests {
    use sea_orm::EntityName;

    use super::prelude::*;

    #[test]
    fn table_names_match_the_persistence_contract() {
        let tables = [
            User.table_name(),
            UserGrade.table_name(),
            SocialPlatform.table_name(),
            PhoneAuthorization.table_name(),
            Address.table_name(),
            UserBrand.table_name(),
            Brand.table_name(),
            BrandCategory.table_name(),
            MainCategory.table_name(),
            SubCategory.table_name(),
            ProductCategory.table_name(),
            SellCategory.table_name(),
            Product.table_name(),
            ProductDetail.table_name(),
            ProductGrade.table_name(),
            ProductStatus.table_name(),
            ProductStatusLog.table_name(),
            PriceHistory.table_name(),
            Image.table_name(),
            Tag.table_name(),
            ProductTag.table_name(),
            Keyword.table_name(),
            ProductKeyword.table_name(),
            RelatedProduct.table_name(),
            PickupTime.table_name(),
            Consignment.table_name(),
            SellStatistic.table_name(),
            SellerReview.table_name(),
        ];

        assert_eq!(
            tables,
            [
                "users",
                "user_grades",
                "social_platforms",
                "phone_authorizations",
                "addresses",
                "users_brands",
                "brands",
                "brand_categories",
                "main_categories",
                "sub_categories",
                "product_categories",
                "sell_categories",
                "products",
                "product_details",
                "product_grades",
                "product_statuses",
                "product_status_logs",
                "price_histories",
                "images",
                "tags",
                "product_tags",
                "keywords",
                "product_keywords",
                "related_products",
                "pickup_times",
                "consignments",
                "sell_statistics",
                "seller_reviews",
            ]
        );
    }
}
