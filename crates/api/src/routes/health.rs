use axum::http::StatusCode;
use axum::{routing::get, Router};

use crate::state::AppState;

/// GET /healthcheck -- liveness only; never touches the database.
async fn healthcheck() -> StatusCode {
    StatusCode::OK
}

/// Mount the liveness route at the root of the server.
pub fn router() -> Router<AppState> {
    Router::new().route("/healthcheck", get(healthcheck))
}
