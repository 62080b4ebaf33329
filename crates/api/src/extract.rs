//! Request extractors that reject with [`AppError`] so every failure,
//! including malformed ids and bodies, gets the standard JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use folio_core::types::{parse_id, DbId};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A positive integer `{id}` path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectId(pub DbId);

impl<S> FromRequestParts<S> for ProjectId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(ProjectId(parse_id(&raw)?))
    }
}

/// JSON body extractor. Unlike `axum::Json`, a body that is not JSON or does
/// not fit the target type is always a 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
