use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, Order, QueryFilter, QuerySelect, Set, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use super::record::{now, stamp_new, stamp_save};
use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::{
    Image, Keyword, PriceHistory, Product, ProductDetail, ProductGrade, ProductKeyword,
    ProductStatus, ProductStatusLog, ProductTag, RelatedProduct, Tag,
};
use crate::db::entities::{
    image, keyword, price_history, product, product_category, product_detail, product_grade,
    product_keyword, product_status, product_status_log, product_tag, related_product, tag,
};

/// Everything needed to list a product: the row, its detail, its sub
/// categories and its opening price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub brand_id: Uuid,
    pub seller_id: Option<Uuid>,
    pub product_grade_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
    pub sell_category_id: Option<Uuid>,
    pub price: Decimal,
    pub size: String,
    pub color: String,
    pub material: String,
    pub description: String,
    pub sub_category_ids: Vec<Uuid>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, brand_id: Uuid, price: Decimal) -> Self {
        Self {
            name: name.into(),
            brand_id,
            seller_id: None,
            product_grade_id: None,
            status_id: None,
            sell_category_id: None,
            price,
            size: String::new(),
            color: String::new(),
            material: String::new(),
            description: String::new(),
            sub_category_ids: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct CatalogDao {
    db: DatabaseConnection,
}

impl DaoBase for CatalogDao {
    type Entity = Product;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

entity_dao!(ProductStatusDao => ProductStatus);
entity_dao!(ProductGradeDao => ProductGrade);
entity_dao!(StatusLogDao => ProductStatusLog);
entity_dao!(PriceHistoryDao => PriceHistory);
entity_dao!(ProductDetailDao => ProductDetail);
entity_dao!(ImageDao => Image);
entity_dao!(TagDao => Tag);
entity_dao!(KeywordDao => Keyword);
entity_dao!(RelatedProductDao => RelatedProduct);

/// Locks the product row for the rest of the transaction.
async fn lock_product(txn: &DatabaseTransaction, id: Uuid) -> DaoResult<product::Model> {
    Product::find_by_id(id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or_else(|| DaoLayerError::not_found::<Product>(id))
}

impl CatalogDao {
    fn statuses(&self) -> ProductStatusDao {
        ProductStatusDao::new(&self.db)
    }

    fn grades(&self) -> ProductGradeDao {
        ProductGradeDao::new(&self.db)
    }

    fn status_logs(&self) -> StatusLogDao {
        StatusLogDao::new(&self.db)
    }

    fn prices(&self) -> PriceHistoryDao {
        PriceHistoryDao::new(&self.db)
    }

    fn details(&self) -> ProductDetailDao {
        ProductDetailDao::new(&self.db)
    }

    fn images(&self) -> ImageDao {
        ImageDao::new(&self.db)
    }

    fn tags(&self) -> TagDao {
        TagDao::new(&self.db)
    }

    fn keywords(&self) -> KeywordDao {
        KeywordDao::new(&self.db)
    }

    fn related(&self) -> RelatedProductDao {
        RelatedProductDao::new(&self.db)
    }

    pub async fn create_status(&self, status: &str) -> DaoResult<product_status::Model> {
        let model = product_status::ActiveModel {
            status: Set(status.to_string()),
            ..Default::default()
        };
        self.statuses().create(model).await
    }

    pub async fn create_grade(&self, grade: &str) -> DaoResult<product_grade::Model> {
        let model = product_grade::ActiveModel {
            grade: Set(grade.to_string()),
            ..Default::default()
        };
        self.grades().create(model).await
    }

    /// Inserts the product with its detail row, category links and first
    /// price record. A status given up front also opens the status log.
    pub async fn create_product(&self, new: NewProduct) -> DaoResult<product::Model> {
        let txn = self.db.begin().await?;

        let mut active = product::ActiveModel {
            name: Set(new.name),
            brand_id: Set(Some(new.brand_id)),
            seller_id: Set(new.seller_id),
            product_grade_id: Set(new.product_grade_id),
            status_id: Set(new.status_id),
            sell_category_id: Set(new.sell_category_id),
            price: Set(new.price),
            view_count: Set(0),
            like_count: Set(0),
            is_sold: Set(false),
            is_deleted: Set(false),
            ..Default::default()
        };
        stamp_new(&mut active);
        let product = active.insert(&txn).await?;

        let mut detail = product_detail::ActiveModel {
            product_id: Set(product.id),
            size: Set(new.size),
            color: Set(new.color),
            material: Set(new.material),
            description: Set(new.description),
            ..Default::default()
        };
        stamp_new(&mut detail);
        detail.insert(&txn).await?;

        for sub_category_id in new.sub_category_ids {
            let mut link = product_category::ActiveModel {
                product_id: Set(product.id),
                sub_category_id: Set(sub_category_id),
                ..Default::default()
            };
            stamp_new(&mut link);
            link.insert(&txn).await?;
        }

        let mut price = price_history::ActiveModel {
            product_id: Set(product.id),
            price: Set(product.price),
            is_uptodate: Set(true),
            ..Default::default()
        };
        stamp_new(&mut price);
        price.insert(&txn).await?;

        if let Some(status_id) = product.status_id {
            let mut log = product_status_log::ActiveModel {
                product_id: Set(product.id),
                status_id: Set(Some(status_id)),
                is_valid: Set(true),
                ..Default::default()
            };
            stamp_new(&mut log);
            log.insert(&txn).await?;
        }

        txn.commit().await?;
        tracing::debug!(product_id = %product.id, "product listed");
        Ok(product)
    }

    pub async fn find_product(&self, id: &Uuid) -> DaoResult<product::Model> {
        self.find_by_id(*id).await
    }

    pub async fn detail(&self, product_id: &Uuid) -> DaoResult<Option<product_detail::Model>> {
        let product_id = *product_id;
        self.details()
            .find(1, 1, None, move |query| {
                query.filter(product_detail::Column::ProductId.eq(product_id))
            })
            .await
            .map(|response| response.data.into_iter().next())
    }

    /// Moves the product to `status_id`. Prior log entries are invalidated so
    /// exactly one valid entry remains.
    pub async fn change_status(
        &self,
        product_id: &Uuid,
        status_id: &Uuid,
    ) -> DaoResult<product_status_log::Model> {
        let txn = self.db.begin().await?;
        let product = lock_product(&txn, *product_id).await?;

        ProductStatusLog::update_many()
            .col_expr(product_status_log::Column::IsValid, Expr::value(false))
            .col_expr(product_status_log::Column::UpdatedAt, Expr::value(now()))
            .filter(product_status_log::Column::ProductId.eq(*product_id))
            .filter(product_status_log::Column::IsValid.eq(true))
            .exec(&txn)
            .await?;

        let mut log = product_status_log::ActiveModel {
            product_id: Set(*product_id),
            status_id: Set(Some(*status_id)),
            is_valid: Set(true),
            ..Default::default()
        };
        stamp_new(&mut log);
        let log = log.insert(&txn).await?;

        let mut active = product.into_active_model();
        active.status_id = Set(Some(*status_id));
        stamp_save(&mut active);
        active.update(&txn).await?;

        txn.commit().await?;
        Ok(log)
    }

    /// Records a new price. Earlier records stop being current and the
    /// product row carries the new price.
    pub async fn change_price(
        &self,
        product_id: &Uuid,
        price: Decimal,
    ) -> DaoResult<price_history::Model> {
        let txn = self.db.begin().await?;
        let product = lock_product(&txn, *product_id).await?;

        PriceHistory::update_many()
            .col_expr(price_history::Column::IsUptodate, Expr::value(false))
            .col_expr(price_history::Column::UpdatedAt, Expr::value(now()))
            .filter(price_history::Column::ProductId.eq(*product_id))
            .filter(price_history::Column::IsUptodate.eq(true))
            .exec(&txn)
            .await?;

        let mut record = price_history::ActiveModel {
            product_id: Set(*product_id),
            price: Set(price),
            is_uptodate: Set(true),
            ..Default::default()
        };
        stamp_new(&mut record);
        let record = record.insert(&txn).await?;

        let mut active = product.into_active_model();
        active.price = Set(price);
        stamp_save(&mut active);
        active.update(&txn).await?;

        txn.commit().await?;
        Ok(record)
    }

    pub async fn current_price(
        &self,
        product_id: &Uuid,
    ) -> DaoResult<Option<price_history::Model>> {
        let product_id = *product_id;
        self.prices()
            .find(1, 1, None, move |query| {
                query
                    .filter(price_history::Column::ProductId.eq(product_id))
                    .filter(price_history::Column::IsUptodate.eq(true))
            })
            .await
            .map(|response| response.data.into_iter().next())
    }

    pub async fn price_history(&self, product_id: &Uuid) -> DaoResult<Vec<price_history::Model>> {
        let product_id = *product_id;
        self.prices()
            .find_all(move |query| query.filter(price_history::Column::ProductId.eq(product_id)))
            .await
    }

    /// Status log of the product, oldest first.
    pub async fn status_history(
        &self,
        product_id: &Uuid,
    ) -> DaoResult<Vec<product_status_log::Model>> {
        let product_id = *product_id;
        self.status_logs()
            .find_all(move |query| {
                query.filter(product_status_log::Column::ProductId.eq(product_id))
            })
            .await
    }

    /// Adds an image. A main image demotes the product's other images while
    /// the product row is locked, so one main image remains.
    pub async fn add_image(
        &self,
        product_id: &Uuid,
        image_url: &str,
        is_main: bool,
    ) -> DaoResult<image::Model> {
        let txn = self.db.begin().await?;

        if is_main {
            lock_product(&txn, *product_id).await?;
            Image::update_many()
                .col_expr(image::Column::IsMain, Expr::value(false))
                .col_expr(image::Column::UpdatedAt, Expr::value(now()))
                .filter(image::Column::ProductId.eq(*product_id))
                .filter(image::Column::IsMain.eq(true))
                .exec(&txn)
                .await?;
        }

        let mut active = image::ActiveModel {
            product_id: Set(*product_id),
            image_url: Set(image_url.to_string()),
            is_main: Set(is_main),
            ..Default::default()
        };
        stamp_new(&mut active);
        let model = active.insert(&txn).await?;

        txn.commit().await?;
        Ok(model)
    }

    pub async fn images_of(&self, product_id: &Uuid) -> DaoResult<Vec<image::Model>> {
        let product_id = *product_id;
        self.images()
            .find_all(move |query| query.filter(image::Column::ProductId.eq(product_id)))
            .await
    }

    async fn find_or_create_tag(&self, name: &str) -> DaoResult<tag::Model> {
        let owned = name.to_string();
        let existing = self
            .tags()
            .find(1, 1, None, move |query| query.filter(tag::Column::Name.eq(owned)))
            .await?
            .data
            .into_iter()
            .next();
        match existing {
            Some(tag) => Ok(tag),
            None => {
                let model = tag::ActiveModel {
                    name: Set(name.to_string()),
                    ..Default::default()
                };
                self.tags().create(model).await
            }
        }
    }

    async fn find_or_create_keyword(&self, name: &str) -> DaoResult<keyword::Model> {
        let owned = name.to_string();
        let existing = self
            .keywords()
            .find(1, 1, None, move |query| query.filter(keyword::Column::Name.eq(owned)))
            .await?
            .data
            .into_iter()
            .next();
        match existing {
            Some(keyword) => Ok(keyword),
            None => {
                let model = keyword::ActiveModel {
                    name: Set(name.to_string()),
                    ..Default::default()
                };
                self.keywords().create(model).await
            }
        }
    }

    /// Tags the product, creating the tag on first use.
    pub async fn tag_product(&self, product_id: &Uuid, name: &str) -> DaoResult<tag::Model> {
        let tag = self.find_or_create_tag(name).await?;
        let mut link = product_tag::ActiveModel {
            product_id: Set(*product_id),
            tag_id: Set(tag.id),
            ..Default::default()
        };
        stamp_new(&mut link);
        link.insert(&self.db).await?;
        Ok(tag)
    }

    pub async fn keyword_product(
        &self,
        product_id: &Uuid,
        name: &str,
    ) -> DaoResult<keyword::Model> {
        let keyword = self.find_or_create_keyword(name).await?;
        let mut link = product_keyword::ActiveModel {
            product_id: Set(*product_id),
            keyword_id: Set(keyword.id),
            ..Default::default()
        };
        stamp_new(&mut link);
        link.insert(&self.db).await?;
        Ok(keyword)
    }

    pub async fn tags_of(&self, product_id: &Uuid) -> DaoResult<Vec<tag::Model>> {
        let tags = ProductTag::find()
            .filter(product_tag::Column::ProductId.eq(*product_id))
            .find_also_related(Tag)
            .all(&self.db)
            .await?;
        Ok(tags.into_iter().filter_map(|(_, tag)| tag).collect())
    }

    pub async fn keywords_of(&self, product_id: &Uuid) -> DaoResult<Vec<keyword::Model>> {
        let keywords = ProductKeyword::find()
            .filter(product_keyword::Column::ProductId.eq(*product_id))
            .find_also_related(Keyword)
            .all(&self.db)
            .await?;
        Ok(keywords.into_iter().filter_map(|(_, keyword)| keyword).collect())
    }

    pub async fn relate(
        &self,
        product_id: &Uuid,
        related_product_id: &Uuid,
    ) -> DaoResult<related_product::Model> {
        let model = related_product::ActiveModel {
            product_id: Set(*product_id),
            related_product_id: Set(*related_product_id),
            ..Default::default()
        };
        self.related().create(model).await
    }

    pub async fn related_product_ids(&self, product_id: &Uuid) -> DaoResult<Vec<Uuid>> {
        let product_id = *product_id;
        let links = self
            .related()
            .find_all(move |query| {
                query.filter(related_product::Column::ProductId.eq(product_id))
            })
            .await?;
        Ok(links.into_iter().map(|link| link.related_product_id).collect())
    }

    /// Unsold, undeleted products of a seller, newest first.
    pub async fn listed_by_seller(&self, seller_id: &Uuid) -> DaoResult<Vec<product::Model>> {
        let seller_id = *seller_id;
        let page = self
            .find(
                1,
                Self::MAX_PAGE_SIZE,
                Some((product::Column::CreatedAt, Order::Desc)),
                move |query| {
                    query
                        .filter(product::Column::SellerId.eq(seller_id))
                        .filter(product::Column::IsSold.eq(false))
                        .filter(product::Column::IsDeleted.eq(false))
                },
            )
            .await?;
        Ok(page.data)
    }

    pub async fn mark_sold(&self, id: &Uuid) -> DaoResult<product::Model> {
        self.update(*id, |active| {
            active.is_sold = Set(true);
        })
        .await
    }
}
