use sea_orm::DatabaseConnection;

use super::{AnalyticsDao, CatalogDao, DaoBase, IdentityDao, LogisticsDao, TaxonomyDao, UserDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn identity(&self) -> IdentityDao {
        DaoBase::new(&self.db)
    }

    pub fn taxonomy(&self) -> TaxonomyDao {
        DaoBase::new(&self.db)
    }

    pub fn catalog(&self) -> CatalogDao {
        DaoBase::new(&self.db)
    }

    pub fn logistics(&self) -> LogisticsDao {
        DaoBase::new(&self.db)
    }

    pub fn analytics(&self) -> AnalyticsDao {
        DaoBase::new(&self.db)
    }
}
