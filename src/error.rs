use crate::db::dao::DaoLayerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Rejected input. Raised before anything is written.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A unique or foreign-key constraint refused the write.
    #[error("integrity violation: {0}")]
    IntegrityViolation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn integrity(message: impl Into<String>) -> Self {
        Self::IntegrityViolation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message)
            | Self::IntegrityViolation(message)
            | Self::NotFound(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::Integrity(message) => AppError::integrity(message),
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::InvalidPagination { .. } => AppError::invalid_argument(err.to_string()),
            DaoLayerError::Db(_) => AppError::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbErr, RuntimeErr};
    use uuid::Uuid;

    use super::AppError;
    use crate::db::dao::DaoLayerError;

    #[test]
    fn constraint_failures_become_integrity_violations() {
        let dao_err = DaoLayerError::from(DbErr::Exec(RuntimeErr::Internal(
            "UNIQUE constraint failed: users.email".to_string(),
        )));
        let err = AppError::from(dao_err);
        assert!(matches!(err, AppError::IntegrityViolation(_)));
        assert!(err.message().contains("users.email"));
    }

    #[test]
    fn missing_rows_become_not_found() {
        let id = Uuid::new_v4();
        let err = AppError::from(DaoLayerError::NotFound { entity: "user", id });
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn other_store_failures_are_internal() {
        let err = AppError::from(DaoLayerError::from(DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_string(),
        ))));
        assert!(matches!(err, AppError::Internal(_)));
    }
}
