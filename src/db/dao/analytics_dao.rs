use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use super::record::{stamp_new, stamp_save};
use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::{Brand, SellStatistic, SellerReview};
use crate::db::entities::{sell_statistic, seller_review};

#[derive(Clone)]
pub struct AnalyticsDao {
    db: DatabaseConnection,
}

impl DaoBase for AnalyticsDao {
    type Entity = SellStatistic;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

entity_dao!(SellerReviewDao => SellerReview);

/// Total over count, rounded to cents.
fn average(total: Decimal, count: i32) -> Decimal {
    if count <= 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(count)).round_dp(2)
}

impl AnalyticsDao {
    fn reviews(&self) -> SellerReviewDao {
        SellerReviewDao::new(&self.db)
    }

    /// Adds one sale of `amount` to the (brand, sub category) row, creating
    /// the row on the first sale. Writers for one brand are serialised on the
    /// brand row, so a missing row is never inserted twice.
    pub async fn record_sale(
        &self,
        brand_id: &Uuid,
        sub_category_id: Option<Uuid>,
        amount: Decimal,
    ) -> DaoResult<sell_statistic::Model> {
        let txn = self.db.begin().await?;

        Brand::find_by_id(*brand_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or_else(|| DaoLayerError::not_found::<Brand>(*brand_id))?;

        let sub_category_filter = match sub_category_id {
            Some(id) => sell_statistic::Column::SubCategoryId.eq(id),
            None => sell_statistic::Column::SubCategoryId.is_null(),
        };
        let existing = SellStatistic::find()
            .filter(sell_statistic::Column::BrandId.eq(*brand_id))
            .filter(sub_category_filter)
            .lock_exclusive()
            .one(&txn)
            .await?;

        let model = match existing {
            Some(row) => {
                let count = row.sell_count.saturating_add(1);
                let total = row.sell_total + amount;
                let mut active = row.into_active_model();
                active.sell_count = Set(count);
                active.sell_total = Set(total);
                active.average_price = Set(average(total, count));
                stamp_save(&mut active);
                active.update(&txn).await?
            }
            None => {
                let mut active = sell_statistic::ActiveModel {
                    brand_id: Set(*brand_id),
                    sub_category_id: Set(sub_category_id),
                    sell_count: Set(1),
                    sell_total: Set(amount),
                    average_price: Set(average(amount, 1)),
                    ..Default::default()
                };
                stamp_new(&mut active);
                active.insert(&txn).await?
            }
        };

        txn.commit().await?;
        Ok(model)
    }

    pub async fn statistics_of_brand(
        &self,
        brand_id: &Uuid,
    ) -> DaoResult<Vec<sell_statistic::Model>> {
        let brand_id = *brand_id;
        self.find_all(move |query| query.filter(sell_statistic::Column::BrandId.eq(brand_id)))
            .await
    }

    pub async fn create_review(
        &self,
        seller_id: &Uuid,
        reviewer_id: Option<Uuid>,
        product_id: Option<Uuid>,
        rating: i16,
        content: &str,
    ) -> DaoResult<seller_review::Model> {
        let model = seller_review::ActiveModel {
            seller_id: Set(*seller_id),
            reviewer_id: Set(reviewer_id),
            product_id: Set(product_id),
            rating: Set(rating),
            content: Set(content.to_string()),
            ..Default::default()
        };
        self.reviews().create(model).await
    }

    pub async fn reviews_for_seller(
        &self,
        seller_id: &Uuid,
    ) -> DaoResult<Vec<seller_review::Model>> {
        let seller_id = *seller_id;
        self.reviews()
            .find_all(move |query| query.filter(seller_review::Column::SellerId.eq(seller_id)))
            .await
    }

    /// Mean rating of the seller's reviews, `None` without reviews.
    pub async fn seller_rating(&self, seller_id: &Uuid) -> DaoResult<Option<Decimal>> {
        let reviews = self.reviews_for_seller(seller_id).await?;
        if reviews.is_empty() {
            return Ok(None);
        }
        let total: Decimal = reviews.iter().map(|review| Decimal::from(review.rating)).sum();
        let count = i32::try_from(reviews.len()).unwrap_or(i32::MAX);
        Ok(Some(average(total, count)))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::{AnalyticsDao, average};
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::{brand, sell_statistic, seller_review};
    use crate::test_helpers::ts;

    fn brand_model(id: Uuid) -> brand::Model {
        brand::Model {
            id,
            created_at: ts(),
            updated_at: ts(),
            name: "BURBERRY".to_string(),
            korean_name: "버버리".to_string(),
            image_url: String::new(),
        }
    }

    fn statistic(brand_id: Uuid, count: i32, total: i64) -> sell_statistic::Model {
        sell_statistic::Model {
            id: Uuid::new_v4(),
            created_at: ts(),
            updated_at: ts(),
            brand_id,
            sub_category_id: None,
            sell_count: count,
            sell_total: Decimal::new(total, 0),
            average_price: average(Decimal::new(total, 0), count),
        }
    }

    fn review(seller_id: Uuid, rating: i16) -> seller_review::Model {
        seller_review::Model {
            id: Uuid::new_v4(),
            created_at: ts(),
            updated_at: ts(),
            seller_id,
            reviewer_id: None,
            product_id: None,
            rating,
            content: String::new(),
        }
    }

    #[test]
    fn average_rounds_to_cents() {
        assert_eq!(average(Decimal::new(100, 0), 3), Decimal::new(3333, 2));
        assert_eq!(average(Decimal::new(100, 0), 0), Decimal::ZERO);
    }

    #[tokio::test]
    async fn first_sale_inserts_a_row() {
        let brand_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[brand_model(brand_id)]])
            .append_query_results([Vec::<sell_statistic::Model>::new()])
            .append_query_results([[statistic(brand_id, 1, 50_000)]])
            .into_connection();
        let dao = AnalyticsDao::new(&db);

        let row = dao
            .record_sale(&brand_id, None, Decimal::new(50_000, 0))
            .await
            .expect("sale should be recorded");
        assert_eq!(row.sell_count, 1);

        let sql = format!("{:?}", db.into_transaction_log());
        let brand_locked_at = sql.find("brands").expect("brand row locked");
        let inserted_at = sql.find("INSERT INTO").expect("statistic inserted");
        assert!(brand_locked_at < inserted_at);
        assert_eq!(sql.matches("FOR UPDATE").count(), 2);
    }

    #[tokio::test]
    async fn later_sale_updates_the_existing_row() {
        let brand_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[brand_model(brand_id)]])
            .append_query_results([[statistic(brand_id, 1, 50_000)]])
            .append_query_results([[statistic(brand_id, 2, 150_000)]])
            .into_connection();
        let dao = AnalyticsDao::new(&db);

        let row = dao
            .record_sale(&brand_id, None, Decimal::new(100_000, 0))
            .await
            .expect("sale should be recorded");
        assert_eq!(row.average_price, Decimal::new(75_000, 0));

        let sql = format!("{:?}", db.into_transaction_log());
        assert!(sql.contains("UPDATE"));
        assert!(!sql.contains("INSERT"));
    }

    #[tokio::test]
    async fn sale_for_missing_brand_is_not_found() {
        let missing = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<brand::Model>::new()])
            .into_connection();
        let dao = AnalyticsDao::new(&db);

        let err = dao
            .record_sale(&missing, None, Decimal::new(10_000, 0))
            .await
            .expect_err("no brand to lock");
        assert!(matches!(err, DaoLayerError::NotFound { id, .. } if id == missing));
    }

    #[tokio::test]
    async fn seller_rating_averages_reviews() {
        let seller_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![review(seller_id, 5), review(seller_id, 4)]])
            .into_connection();
        let dao = AnalyticsDao::new(&db);

        let rating = dao.seller_rating(&seller_id).await.expect("query should succeed");
        assert_eq!(rating, Some(Decimal::new(450, 2)));
    }

    #[tokio::test]
    async fn seller_without_reviews_has_no_rating() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<seller_review::Model>::new()])
            .into_connection();
        let dao = AnalyticsDao::new(&db);

        let rating = dao
            .seller_rating(&Uuid::new_v4())
            .await
            .expect("query should succeed");
        assert_eq!(rating, None);
    }
}
