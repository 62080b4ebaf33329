//! The persistence gateway seam.

use async_trait::async_trait;
use folio_core::project::{NewProject, ProjectUpdate};
use folio_core::types::DbId;

use crate::error::StoreError;
use crate::models::project::Project;

/// Every statement issued against the `projects` table goes through this
/// trait. Implementations hold no business rules beyond what the table
/// itself enforces (the unique `name`).
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects ordered by id.
    async fn list(&self) -> Result<Vec<Project>, StoreError>;

    /// Insert a validated project, returning the stored row with its new id.
    async fn insert(&self, input: &NewProject) -> Result<Project, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError>;

    /// Overwrite the links present in `update`, keeping stored values for
    /// absent ones. Returns the number of rows affected.
    async fn merge_update(&self, id: DbId, update: &ProjectUpdate) -> Result<u64, StoreError>;

    /// Remove the row. Returns the number of rows affected.
    async fn delete(&self, id: DbId) -> Result<u64, StoreError>;
}
