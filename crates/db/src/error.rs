//! Classification of storage failures.
//!
//! This is the only place that looks at engine-specific error details.
//! Callers match on [`StoreError`] and never on SQLSTATE codes.

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write collided with the unique `name` constraint. Carries the name.
    #[error("Project with name: {0} already exists")]
    UniqueConstraintViolation(String),

    #[error("Row not found")]
    NotFound,

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Anything else: connection loss, timeouts, unexpected engine errors.
    #[error("Storage failure: {0}")]
    TransientOrUnknown(String),
}

/// Classify a raw sqlx error.
///
/// `name` is the project name written by the failing statement. Only writes
/// that carry a name can surface as [`StoreError::UniqueConstraintViolation`];
/// a unique violation without one is unclassified. Never retries.
pub fn classify(err: sqlx::Error, name: Option<&str>) -> StoreError {
    match (err, name) {
        (sqlx::Error::RowNotFound, _) => StoreError::NotFound,
        (sqlx::Error::Database(db_err), Some(name))
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
        {
            StoreError::UniqueConstraintViolation(name.to_string())
        }
        (other, _) => StoreError::TransientOrUnknown(other.to_string()),
    }
}
