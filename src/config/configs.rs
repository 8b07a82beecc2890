use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub database: Option<DatabaseConfig>,
    pub accounts: AccountsConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_db_min_idle")]
    pub min_idle: u32,
    #[serde(default = "default_db_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Create missing tables and columns from the entity definitions on connect.
    #[serde(default = "default_db_sync_schema")]
    pub sync_schema: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_db_max_connections(),
            min_idle: default_db_min_idle(),
            connect_timeout_secs: default_db_connect_timeout_secs(),
            sync_schema: default_db_sync_schema(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountsConfig {
    /// Consecutive failed logins that lock an account.
    pub max_login_failures: i32,
    pub superuser_email: Option<String>,
    pub superuser_password: Option<String>,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            max_login_failures: defaults::DEFAULT_MAX_LOGIN_FAILURES as i32,
            superuser_email: None,
            superuser_password: None,
        }
    }
}

fn default_db_max_connections() -> u32 {
    defaults::DEFAULT_DB_MAX_CONNECTIONS as u32
}

fn default_db_min_idle() -> u32 {
    defaults::DEFAULT_DB_MIN_IDLE as u32
}

fn default_db_connect_timeout_secs() -> u64 {
    defaults::DEFAULT_DB_CONNECT_TIMEOUT_SECS as u64
}

fn default_db_sync_schema() -> bool {
    defaults::DEFAULT_DB_SYNC_SCHEMA
}

#[cfg(test)]
mod tests {
    use ::config as config_rs;

    use super::AppConfig;
    use crate::config::EnvConfig;

    fn source(vars: &[(&str, &str)]) -> config_rs::Environment {
        let map = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        config_rs::Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(map))
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = AppConfig::from_source(source(&[])).expect("defaults should be valid");

        assert_eq!(cfg.logging.rust_log, "info,sqlx=warn");
        assert!(cfg.database.is_none());
        assert_eq!(cfg.accounts.max_login_failures, 5);
        assert!(cfg.accounts.superuser_email.is_none());
    }

    #[test]
    fn reads_nested_sections() {
        let cfg = AppConfig::from_source(source(&[
            ("APP_DATABASE__URL", "postgres://localhost/store"),
            ("APP_DATABASE__MAX_CONNECTIONS", "4"),
            ("APP_ACCOUNTS__MAX_LOGIN_FAILURES", "3"),
            ("APP_ACCOUNTS__SUPERUSER_EMAIL", "admin@seoulappdev.com"),
            ("APP_ACCOUNTS__SUPERUSER_PASSWORD", "test123"),
        ]))
        .expect("config should load");

        let database = cfg.database.expect("database section present");
        assert_eq!(database.url, "postgres://localhost/store");
        assert_eq!(database.max_connections, 4);
        assert_eq!(database.min_idle, 2);
        assert!(database.sync_schema);
        assert_eq!(cfg.accounts.max_login_failures, 3);
        assert_eq!(
            cfg.accounts.superuser_email.as_deref(),
            Some("admin@seoulappdev.com")
        );
        assert_eq!(cfg.accounts.superuser_password.as_deref(), Some("test123"));
    }

    #[test]
    fn superuser_email_needs_a_password() {
        let err = AppConfig::from_source(source(&[(
            "APP_ACCOUNTS__SUPERUSER_EMAIL",
            "admin@seoulappdev.com",
        )]))
        .expect_err("password missing");

        assert!(
            err.to_string()
                .contains("superuser_password is required with superuser_email")
        );
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = AppConfig::from_source(source(&[
            ("APP_DATABASE__URL", "postgres://localhost/store"),
            ("APP_DATABASE__MAX_CONNECTIONS", "1"),
            ("APP_DATABASE__MIN_IDLE", "3"),
        ]))
        .expect_err("min_idle above max_connections");

        assert!(err.to_string().contains("database.min_idle"));
    }
}
