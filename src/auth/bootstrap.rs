use anyhow::{Context, Result};

use crate::{config::AccountsConfig, db::entities::user, services::ServiceContext};

/// Creates the configured superuser unless an account with that email is
/// already present. Returns the account when one was created.
pub async fn seed_superuser(
    cfg: &AccountsConfig,
    services: &ServiceContext,
) -> Result<Option<user::Model>> {
    let (Some(email), Some(password)) = (&cfg.superuser_email, &cfg.superuser_password) else {
        tracing::debug!("no superuser configured");
        return Ok(None);
    };

    let users = services.user();
    if let Some(existing) = users
        .find_by_email(email)
        .await
        .context("failed to look up superuser")?
    {
        tracing::info!(email = %existing.email, "superuser already present");
        return Ok(None);
    }

    let user = users
        .promote_to_superuser(Some(email.as_str()), Some(password.as_str()))
        .await
        .context("failed to seed superuser")?;
    tracing::info!(email = %user.email, "seeded superuser");
    Ok(Some(user))
}
