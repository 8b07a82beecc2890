use anyhow::Context;

use consign_store::{
    auth::bootstrap::seed_superuser, config::AppConfig, db::connection, logging::init_tracing,
    services::ServiceContext,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("startup failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging);

    let database = cfg
        .database
        .as_ref()
        .context("database.url is not configured (set APP_DATABASE__URL)")?;
    let db = connection::connect(database).await?;

    let services = ServiceContext::with_accounts_config(&db, cfg.accounts.clone());
    seed_superuser(&cfg.accounts, &services).await?;

    tracing::info!("store ready");
    Ok(())
}
