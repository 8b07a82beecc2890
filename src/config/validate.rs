use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.logging.rust_log.trim().is_empty() {
        errors.push("logging.rust_log must not be empty".to_string());
    }

    if let Some(database) = cfg.database.as_ref() {
        if database.url.trim().is_empty() {
            errors.push("database.url must not be empty".to_string());
        }

        if database.max_connections == 0 {
            errors.push("database.max_connections must be > 0".to_string());
        }

        if database.min_idle > database.max_connections {
            errors.push(format!(
                "database.min_idle ({}) must be <= database.max_connections ({})",
                database.min_idle, database.max_connections
            ));
        }

        if database.connect_timeout_secs == 0 {
            errors.push("database.connect_timeout_secs must be > 0".to_string());
        }
    }

    let accounts = &cfg.accounts;
    if accounts.max_login_failures <= 0 {
        errors.push("accounts.max_login_failures must be > 0".to_string());
    }

    match (&accounts.superuser_email, &accounts.superuser_password) {
        (Some(email), Some(_)) if email.trim().is_empty() => {
            errors.push("accounts.superuser_email must not be empty".to_string());
        }
        (Some(_), None) => {
            errors.push("accounts.superuser_password is required with superuser_email".to_string());
        }
        (None, Some(_)) => {
            errors.push("accounts.superuser_email is required with superuser_password".to_string());
        }
        _ => {}
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
