//! In-memory [`ProjectStore`] for development and tests.
//!
//! Mirrors the table's behaviour: ids come from a monotonically increasing
//! sequence and `name` is unique (case-sensitive, like the PostgreSQL
//! constraint).

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use folio_core::project::{NewProject, ProjectUpdate};
use folio_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::project::Project;
use crate::store::ProjectStore;

#[derive(Debug, Default)]
struct Table {
    /// Last id handed out; BIGSERIAL starts at 1.
    last_id: DbId,
    rows: BTreeMap<DbId, Project>,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn insert(&self, input: &NewProject) -> Result<Project, StoreError> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|p| p.name == input.name) {
            return Err(StoreError::UniqueConstraintViolation(input.name.clone()));
        }

        table.last_id += 1;
        let project = Project {
            id: table.last_id,
            name: input.name.clone(),
            repo_link: input.repo_link.clone(),
            live_site_link: input.live_site_link.clone(),
        };
        table.rows.insert(project.id, project.clone());

        tracing::debug!(project_id = project.id, "Inserted project in memory");
        Ok(project)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn merge_update(&self, id: DbId, update: &ProjectUpdate) -> Result<u64, StoreError> {
        let mut table = self.table.write().await;

        let Some(project) = table.rows.get_mut(&id) else {
            return Ok(0);
        };
        if let Some(repo_link) = &update.repo_link {
            project.repo_link = Some(repo_link.clone());
        }
        if let Some(live_site_link) = &update.live_site_link {
            project.live_site_link = Some(live_site_link.clone());
        }
        Ok(1)
    }

    async fn delete(&self, id: DbId) -> Result<u64, StoreError> {
        let mut table = self.table.write().await;
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }
}
