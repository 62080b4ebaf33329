pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Resource routes, mounted at the root of the server.
///
/// ```text
/// /projects    project CRUD
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
