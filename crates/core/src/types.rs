use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Parse a path segment into a row id. Only positive integers are ids.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::MalformedInput(format!(
            "'{raw}' is not a valid id: expected a positive integer"
        ))),
    }
}
