use sea_orm::{DbErr, SqlErr};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(DbErr),
    /// Unique or foreign-key constraint rejected by the store.
    #[error("Integrity violation: {0}")]
    Integrity(String),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("Invalid pagination: page={page} page_size={page_size}")]
    InvalidPagination { page: u64, page_size: u64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    pub fn not_found<E>(id: Uuid) -> Self {
        Self::NotFound {
            entity: std::any::type_name::<E>(),
            id,
        }
    }
}

impl From<DbErr> for DaoLayerError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message))
            | Some(SqlErr::ForeignKeyConstraintViolation(message)) => Self::Integrity(message),
            _ if is_constraint_message(&err.to_string()) => Self::Integrity(err.to_string()),
            _ => Self::Db(err),
        }
    }
}

// Driver errors that do not reach us as sqlx errors (pooled proxies, mocks)
// only carry the backend's message text.
fn is_constraint_message(message: &str) -> bool {
    const MARKERS: [&str; 5] = [
        "duplicate key value violates unique constraint",
        "violates foreign key constraint",
        "UNIQUE constraint failed",
        "FOREIGN KEY constraint failed",
        "Duplicate entry",
    ];
    MARKERS.iter().any(|marker| message.contains(marker))
}
