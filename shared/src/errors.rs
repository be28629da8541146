/// Unified error types for the Fireside content backend.
use thiserror::Error;

/// Top-level error type for content operations.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<sqlx::Error> for CmsError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => CmsError::NotFound("Record".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                CmsError::Conflict(format!("duplicate value ({})", db.message()))
            }
            _ => CmsError::Database(err),
        }
    }
}

impl CmsError {
    /// Shorthand for a missing record of the given kind.
    pub fn not_found(kind: &str) -> Self {
        CmsError::NotFound(kind.to_string())
    }

    /// Whether the failure was caused by the caller rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CmsError::NotFound(_) | CmsError::Validation(_) | CmsError::Conflict(_)
        )
    }
}

/// Result type alias for content operations.
pub type CmsResult<T> = Result<T, CmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: CmsError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, CmsError::NotFound(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(CmsError::not_found("Episode").to_string(), "Episode not found");
        assert_eq!(
            CmsError::Validation("title is required".into()).to_string(),
            "Invalid input: title is required"
        );
        assert!(!CmsError::Storage("bucket missing".into()).is_client_error());
    }
}
