/// Declares a DAO over a single `#[record]` entity with no extra behaviour.
macro_rules! entity_dao {
    ($(#[$meta:meta])* $vis:vis $name:ident => $entity:ty) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name {
            db: sea_orm::DatabaseConnection,
        }

        impl $crate::db::dao::DaoBase for $name {
            type Entity = $entity;

            fn from_db(db: sea_orm::DatabaseConnection) -> Self {
                Self { db }
            }

            fn db(&self) -> &sea_orm::DatabaseConnection {
                &self.db
            }
        }
    };
}

pub mod analytics_dao;
pub mod base;
pub mod catalog_dao;
mod context;
pub mod error;
pub mod identity_dao;
pub mod logistics_dao;
pub mod record;
pub mod taxonomy_dao;
pub mod user_dao;

pub use analytics_dao::AnalyticsDao;
pub use base::{DaoBase, PaginatedResponse};
pub use catalog_dao::{CatalogDao, NewProduct};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use identity_dao::IdentityDao;
pub use logistics_dao::{LogisticsDao, NewConsignment};
pub use record::{HasCreatedColumn, RecordActiveModel};
pub use taxonomy_dao::TaxonomyDao;
pub use user_dao::{NewUser, UserDao};
