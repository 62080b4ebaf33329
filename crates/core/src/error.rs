use crate::types::DbId;

/// Failures decided by domain code before anything reaches storage.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Malformed input: {0}")]
    MalformedInput(String),
}
