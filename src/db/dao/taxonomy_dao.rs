use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::{
    Brand, BrandCategory, MainCategory, ProductCategory, SellCategory, SubCategory,
};
use crate::db::entities::{
    brand, brand_category, main_category, product_category, sell_category, sub_category,
};

#[derive(Clone)]
pub struct TaxonomyDao {
    db: DatabaseConnection,
}

impl DaoBase for TaxonomyDao {
    type Entity = Brand;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

entity_dao!(MainCategoryDao => MainCategory);
entity_dao!(SubCategoryDao => SubCategory);
entity_dao!(BrandCategoryDao => BrandCategory);
entity_dao!(SellCategoryDao => SellCategory);
entity_dao!(ProductCategoryDao => ProductCategory);

impl TaxonomyDao {
    fn main_categories(&self) -> MainCategoryDao {
        MainCategoryDao::new(&self.db)
    }

    fn sub_categories(&self) -> SubCategoryDao {
        SubCategoryDao::new(&self.db)
    }

    fn brand_categories(&self) -> BrandCategoryDao {
        BrandCategoryDao::new(&self.db)
    }

    fn sell_categories(&self) -> SellCategoryDao {
        SellCategoryDao::new(&self.db)
    }

    fn product_categories(&self) -> ProductCategoryDao {
        ProductCategoryDao::new(&self.db)
    }

    pub async fn create_brand(
        &self,
        name: &str,
        korean_name: &str,
        image_url: &str,
    ) -> DaoResult<brand::Model> {
        let model = brand::ActiveModel {
            name: Set(name.to_string()),
            korean_name: Set(korean_name.to_string()),
            image_url: Set(image_url.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_brand(&self, id: &Uuid) -> DaoResult<brand::Model> {
        self.find_by_id(*id).await
    }

    pub async fn find_brand_by_name(&self, name: &str) -> DaoResult<Option<brand::Model>> {
        let name = name.to_string();
        self.find(1, 1, None, move |query| query.filter(brand::Column::Name.eq(name)))
            .await
            .map(|response| response.data.into_iter().next())
    }

    /// Products of the brand keep their rows with `brand_id` set to NULL.
    pub async fn delete_brand(&self, id: &Uuid) -> DaoResult<Uuid> {
        self.delete(*id).await
    }

    pub async fn create_main_category(&self, name: &str) -> DaoResult<main_category::Model> {
        let model = main_category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        self.main_categories().create(model).await
    }

    pub async fn create_sub_category(
        &self,
        main_category_id: &Uuid,
        name: &str,
    ) -> DaoResult<sub_category::Model> {
        let model = sub_category::ActiveModel {
            main_category_id: Set(*main_category_id),
            name: Set(name.to_string()),
            ..Default::default()
        };
        self.sub_categories().create(model).await
    }

    pub async fn sub_categories_of(
        &self,
        main_category_id: &Uuid,
    ) -> DaoResult<Vec<sub_category::Model>> {
        let main_category_id = *main_category_id;
        self.sub_categories()
            .find_all(move |query| {
                query.filter(sub_category::Column::MainCategoryId.eq(main_category_id))
            })
            .await
    }

    pub async fn link_brand_category(
        &self,
        brand_id: &Uuid,
        main_category_id: &Uuid,
    ) -> DaoResult<brand_category::Model> {
        let model = brand_category::ActiveModel {
            brand_id: Set(*brand_id),
            main_category_id: Set(*main_category_id),
            ..Default::default()
        };
        self.brand_categories().create(model).await
    }

    pub async fn main_category_ids_of_brand(&self, brand_id: &Uuid) -> DaoResult<Vec<Uuid>> {
        let brand_id = *brand_id;
        let links = self
            .brand_categories()
            .find_all(move |query| query.filter(brand_category::Column::BrandId.eq(brand_id)))
            .await?;
        Ok(links.into_iter().map(|link| link.main_category_id).collect())
    }

    pub async fn create_sell_category(&self, name: &str) -> DaoResult<sell_category::Model> {
        let model = sell_category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        self.sell_categories().create(model).await
    }

    pub async fn product_ids_in_sub_category(&self, sub_category_id: &Uuid) -> DaoResult<Vec<Uuid>> {
        let sub_category_id = *sub_category_id;
        let links = self
            .product_categories()
            .find_all(move |query| {
                query.filter(product_category::Column::SubCategoryId.eq(sub_category_id))
            })
            .await?;
        Ok(links.into_iter().map(|link| link.product_id).collect())
    }

    pub async fn sub_category_ids_of_product(&self, product_id: &Uuid) -> DaoResult<Vec<Uuid>> {
        let product_id = *product_id;
        let links = self
            .product_categories()
            .find_all(move |query| query.filter(product_category::Column::ProductId.eq(product_id)))
            .await?;
        Ok(links.into_iter().map(|link| link.sub_category_id).collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::TaxonomyDao;
    use crate::db::dao::DaoBase;
    use crate::db::entities::{brand, brand_category};
    use crate::test_helpers::ts;

    fn brand_model(name: &str) -> brand::Model {
        brand::Model {
            id: Uuid::new_v4(),
            created_at: ts(),
            updated_at: ts(),
            name: name.to_string(),
            korean_name: "버버리".to_string(),
            image_url: String::new(),
        }
    }

    #[tokio::test]
    async fn find_brand_by_name_returns_match() {
        let brand = brand_model("Burberry");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[brand.clone()]])
            .into_connection();
        let dao = TaxonomyDao::new(&db);

        let found = dao
            .find_brand_by_name("Burberry")
            .await
            .expect("query should succeed");
        assert_eq!(found, Some(brand));
    }

    #[tokio::test]
    async fn main_category_ids_of_brand_maps_links() {
        let brand_id = Uuid::new_v4();
        let (outer, bags) = (Uuid::new_v4(), Uuid::new_v4());
        let link = |main_category_id| brand_category::Model {
            id: Uuid::new_v4(),
            created_at: ts(),
            updated_at: ts(),
            brand_id,
            main_category_id,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[link(outer), link(bags)]])
            .into_connection();
        let dao = TaxonomyDao::new(&db);

        let ids = dao
            .main_category_ids_of_brand(&brand_id)
            .await
            .expect("query should succeed");
        assert_eq!(ids, vec![outer, bags]);
    }
}
