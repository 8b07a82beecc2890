use sea_orm::DatabaseConnection;

use crate::{
    config::AccountsConfig,
    db::dao::{DaoContext, IdentityDao, TaxonomyDao},
    services::{
        analytics_service::AnalyticsService, catalog_service::CatalogService,
        logistics_service::LogisticsService, user_service::UserService,
    },
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
    accounts: AccountsConfig,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self::with_accounts_config(db, AccountsConfig::default())
    }

    pub fn with_accounts_config(db: &DatabaseConnection, accounts: AccountsConfig) -> Self {
        Self {
            daos: DaoContext::new(db),
            accounts,
        }
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user(), self.accounts.max_login_failures)
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.daos.catalog())
    }

    pub fn logistics(&self) -> LogisticsService {
        LogisticsService::new(self.daos.logistics(), self.daos.identity())
    }

    pub fn analytics(&self) -> AnalyticsService {
        AnalyticsService::new(self.daos.analytics())
    }

    pub fn identity_dao(&self) -> IdentityDao {
        self.daos.identity()
    }

    pub fn taxonomy_dao(&self) -> TaxonomyDao {
        self.daos.taxonomy()
    }
}
