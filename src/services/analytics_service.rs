use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    db::dao::AnalyticsDao,
    db::entities::{sell_statistic, seller_review},
    error::AppError,
};

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

#[derive(Clone)]
pub struct AnalyticsService {
    analytics_dao: AnalyticsDao,
}

impl AnalyticsService {
    pub fn new(analytics_dao: AnalyticsDao) -> Self {
        Self { analytics_dao }
    }

    pub async fn record_sale(
        &self,
        brand_id: &Uuid,
        sub_category_id: Option<Uuid>,
        amount: Decimal,
    ) -> Result<sell_statistic::Model, AppError> {
        if amount < Decimal::ZERO {
            return Err(AppError::invalid_argument(format!(
                "sale amount must not be negative, got {amount}"
            )));
        }
        Ok(self
            .analytics_dao
            .record_sale(brand_id, sub_category_id, amount)
            .await?)
    }

    pub async fn statistics_of_brand(
        &self,
        brand_id: &Uuid,
    ) -> Result<Vec<sell_statistic::Model>, AppError> {
        Ok(self.analytics_dao.statistics_of_brand(brand_id).await?)
    }

    pub async fn add_review(
        &self,
        seller_id: &Uuid,
        reviewer_id: Option<Uuid>,
        product_id: Option<Uuid>,
        rating: i16,
        content: &str,
    ) -> Result<seller_review::Model, AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            tracing::warn!(rating, "review rating out of range");
            return Err(AppError::invalid_argument(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
            )));
        }
        if reviewer_id == Some(*seller_id) {
            return Err(AppError::invalid_argument("sellers cannot review themselves"));
        }
        Ok(self
            .analytics_dao
            .create_review(seller_id, reviewer_id, product_id, rating, content)
            .await?)
    }

    pub async fn reviews_for_seller(
        &self,
        seller_id: &Uuid,
    ) -> Result<Vec<seller_review::Model>, AppError> {
        Ok(self.analytics_dao.reviews_for_seller(seller_id).await?)
    }

    pub async fn seller_rating(&self, seller_id: &Uuid) -> Result<Option<Decimal>, AppError> {
        Ok(self.analytics_dao.seller_rating(seller_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::AnalyticsService;
    use crate::db::dao::{AnalyticsDao, DaoBase};
    use crate::db::entities::seller_review;
    use crate::error::AppError;
    use crate::test_helpers::ts;

    fn service(db: &sea_orm::DatabaseConnection) -> AnalyticsService {
        AnalyticsService::new(AnalyticsDao::new(db))
    }

    #[tokio::test]
    async fn ratings_outside_one_to_five_are_rejected() {
        for rating in [0, 6, -1] {
            let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
            let err = service(&db)
                .add_review(&Uuid::new_v4(), None, None, rating, "")
                .await
                .expect_err("rating out of range");
            assert!(matches!(err, AppError::InvalidArgument(_)));
            assert!(db.into_transaction_log().is_empty());
        }
    }

    #[tokio::test]
    async fn boundary_ratings_are_stored() {
        for rating in [1, 5] {
            let seller_id = Uuid::new_v4();
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[seller_review::Model {
                    id: Uuid::new_v4(),
                    created_at: ts(),
                    updated_at: ts(),
                    seller_id,
                    reviewer_id: None,
                    product_id: None,
                    rating,
                    content: "친절해요".to_string(),
                }]])
                .into_connection();

            let review = service(&db)
                .add_review(&seller_id, None, None, rating, "친절해요")
                .await
                .expect("review should be stored");
            assert_eq!(review.rating, rating);
        }
    }

    #[tokio::test]
    async fn negative_sale_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let err = service(&db)
            .record_sale(&Uuid::new_v4(), None, Decimal::new(-100, 0))
            .await
            .expect_err("negative amount");
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }
}
