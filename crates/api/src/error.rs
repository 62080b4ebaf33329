use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use folio_core::validation::FieldViolation;
use folio_db::StoreError;
use serde_json::json;

const GENERIC_INTERNAL: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for failures decided before persistence, [`StoreError`]
/// for classified storage failures, and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A classified storage failure from `folio_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The payload failed schema validation.
    #[error("Validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id: {id} not found"),
                ),
                CoreError::MalformedInput(msg) => {
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
                }
            },

            // --- Storage errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- Validation ---
            AppError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let AppError::Validation(violations) = &self {
            body["details"] = json!(violations);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Map a classified storage failure to an HTTP status, error code, and message.
///
/// - `UniqueConstraintViolation` maps to 409 and names the duplicate.
/// - `NotFound` maps to 404, `MalformedInput` to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::UniqueConstraintViolation(_) => {
            (StatusCode::CONFLICT, "CONFLICT", err.to_string())
        }
        StoreError::NotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        StoreError::MalformedInput(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        StoreError::TransientOrUnknown(msg) => {
            tracing::error!(error = %msg, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                GENERIC_INTERNAL.to_string(),
            )
        }
    }
}
