use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    db::dao::{CatalogDao, DaoLayerError, NewProduct},
    db::entities::{
        image, keyword, price_history, product, product_detail, product_grade, product_status,
        product_status_log, tag,
    },
    error::AppError,
};

fn ensure_price(price: Decimal) -> Result<(), AppError> {
    if price < Decimal::ZERO {
        tracing::warn!(%price, "negative price rejected");
        return Err(AppError::invalid_argument(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct CatalogService {
    catalog_dao: CatalogDao,
}

impl CatalogService {
    pub fn new(catalog_dao: CatalogDao) -> Self {
        Self { catalog_dao }
    }

    pub async fn create_status(&self, status: &str) -> Result<product_status::Model, AppError> {
        if status.trim().is_empty() {
            return Err(AppError::invalid_argument("status must be set"));
        }
        Ok(self.catalog_dao.create_status(status.trim()).await?)
    }

    pub async fn create_grade(&self, grade: &str) -> Result<product_grade::Model, AppError> {
        if grade.trim().is_empty() {
            return Err(AppError::invalid_argument("product grade must be set"));
        }
        Ok(self.catalog_dao.create_grade(grade.trim()).await?)
    }

    pub async fn create_product(&self, new: NewProduct) -> Result<product::Model, AppError> {
        if new.name.trim().is_empty() {
            return Err(AppError::invalid_argument("product name must be set"));
        }
        ensure_price(new.price)?;
        Ok(self.catalog_dao.create_product(new).await?)
    }

    pub async fn find_product(&self, id: &Uuid) -> Result<Option<product::Model>, AppError> {
        match self.catalog_dao.find_product(id).await {
            Ok(model) => Ok(Some(model)),
            Err(DaoLayerError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn detail(&self, product_id: &Uuid) -> Result<Option<product_detail::Model>, AppError> {
        Ok(self.catalog_dao.detail(product_id).await?)
    }

    /// Any status may follow any other; the new log entry becomes the only
    /// valid one.
    pub async fn change_status(
        &self,
        product_id: &Uuid,
        status_id: &Uuid,
    ) -> Result<product_status_log::Model, AppError> {
        let log = self.catalog_dao.change_status(product_id, status_id).await?;
        tracing::info!(%product_id, %status_id, "product status changed");
        Ok(log)
    }

    pub async fn change_price(
        &self,
        product_id: &Uuid,
        price: Decimal,
    ) -> Result<price_history::Model, AppError> {
        ensure_price(price)?;
        let record = self.catalog_dao.change_price(product_id, price).await?;
        tracing::info!(%product_id, %price, "product price changed");
        Ok(record)
    }

    pub async fn current_price(&self, product_id: &Uuid) -> Result<Option<Decimal>, AppError> {
        let record = self.catalog_dao.current_price(product_id).await?;
        Ok(record.map(|record| record.price))
    }

    pub async fn price_history(
        &self,
        product_id: &Uuid,
    ) -> Result<Vec<price_history::Model>, AppError> {
        Ok(self.catalog_dao.price_history(product_id).await?)
    }

    pub async fn status_history(
        &self,
        product_id: &Uuid,
    ) -> Result<Vec<product_status_log::Model>, AppError> {
        Ok(self.catalog_dao.status_history(product_id).await?)
    }

    pub async fn add_image(
        &self,
        product_id: &Uuid,
        image_url: &str,
        is_main: bool,
    ) -> Result<image::Model, AppError> {
        if image_url.trim().is_empty() {
            return Err(AppError::invalid_argument("image url must be set"));
        }
        Ok(self.catalog_dao.add_image(product_id, image_url, is_main).await?)
    }

    pub async fn tag(&self, product_id: &Uuid, name: &str) -> Result<tag::Model, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_argument("tag must not be empty"));
        }
        Ok(self.catalog_dao.tag_product(product_id, name).await?)
    }

    pub async fn add_keyword(
        &self,
        product_id: &Uuid,
        name: &str,
    ) -> Result<keyword::Model, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_argument("keyword must not be empty"));
        }
        Ok(self.catalog_dao.keyword_product(product_id, name).await?)
    }

    pub async fn tags(&self, product_id: &Uuid) -> Result<Vec<tag::Model>, AppError> {
        Ok(self.catalog_dao.tags_of(product_id).await?)
    }

    pub async fn keywords(&self, product_id: &Uuid) -> Result<Vec<keyword::Model>, AppError> {
        Ok(self.catalog_dao.keywords_of(product_id).await?)
    }

    pub async fn relate(&self, product_id: &Uuid, related_id: &Uuid) -> Result<(), AppError> {
        if product_id == related_id {
            return Err(AppError::invalid_argument("a product cannot relate to itself"));
        }
        self.catalog_dao.relate(product_id, related_id).await?;
        Ok(())
    }

    pub async fn related_product_ids(&self, product_id: &Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(self.catalog_dao.related_product_ids(product_id).await?)
    }

    pub async fn listed_by_seller(&self, seller_id: &Uuid) -> Result<Vec<product::Model>, AppError> {
        Ok(self.catalog_dao.listed_by_seller(seller_id).await?)
    }

    pub async fn mark_sold(&self, id: &Uuid) -> Result<product::Model, AppError> {
        Ok(self.catalog_dao.mark_sold(id).await?)
    }
}
