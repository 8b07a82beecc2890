use anyhow::Result;
use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers::{self, DbProviders};
use crate::config::DatabaseConfig;

/// Entities registered by `#[sea_orm::model]` under this path are created or
/// altered by `sync_schema`.
pub const ENTITY_PATH: &str = "consign_store::db::entities::*";

pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let registry = providers::default_registry()?;
    connect_with(&registry, cfg).await
}

pub async fn connect_with(registry: &DbProviders, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let (provider, db) = registry.connect(cfg).await?;
    info!(provider = %provider, "connected to database");

    if cfg.sync_schema {
        sync_schema(&db).await?;
    }
    Ok(db)
}

pub async fn sync_schema(db: &DatabaseConnection) -> Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry(ENTITY_PATH).sync(db).await?;
    Ok(())
}
