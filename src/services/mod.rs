pub mod analytics_service;
pub mod catalog_service;
pub mod context;
pub mod logistics_service;
pub mod user_service;

pub use context::ServiceContext;
