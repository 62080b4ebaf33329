use std::sync::Arc;

use folio_db::ProjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway for the `projects` table.
    pub projects: Arc<dyn ProjectStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(projects: Arc<dyn ProjectStore>, config: ServerConfig) -> Self {
        Self {
            projects,
            config: Arc::new(config),
        }
    }
}
