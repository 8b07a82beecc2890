pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod services;
pub mod test_helpers;
