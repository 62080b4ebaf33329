//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests call `IntoResponse` directly on `AppError` values; no router
//! or store is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use folio_api::error::AppError;
use folio_core::error::CoreError;
use folio_core::validation::FieldViolation;
use folio_db::StoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_naming_the_id() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id: 42 not found");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn malformed_input_returns_400() {
    let err = AppError::Core(CoreError::MalformedInput("'abc' is not a valid id".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "'abc' is not a valid id");
}

#[tokio::test]
async fn validation_error_returns_400_with_details() {
    let err = AppError::Validation(vec![FieldViolation {
        field: Some("name".into()),
        code: "length".into(),
        message: "Name must be between 3 and 25 characters".into(),
    }]);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["details"][0]["field"], "name");
    assert_eq!(json["details"][0]["code"], "length");
}

#[tokio::test]
async fn unique_violation_returns_409_with_name() {
    let err = AppError::from(StoreError::UniqueConstraintViolation("portfolio".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Project with name: portfolio already exists");
}

#[tokio::test]
async fn store_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Store(StoreError::NotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn store_malformed_input_returns_400() {
    let err = AppError::Store(StoreError::MalformedInput("id out of range".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn unclassified_storage_failure_returns_500_and_sanitizes_message() {
    let err = AppError::Store(StoreError::TransientOrUnknown(
        "password authentication failed for user \"postgres\"".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(
        !json.to_string().contains("password"),
        "Internal error response must not leak sensitive details"
    );
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}
