pub mod configs;
pub mod defaults;
pub mod envconfig;
pub mod validate;

pub use configs::{AccountsConfig, AppConfig, DatabaseConfig, LoggingConfig};
pub use envconfig::EnvConfig;
