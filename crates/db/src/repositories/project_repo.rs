//! Repository for the `projects` table.

use async_trait::async_trait;
use folio_core::project::{NewProject, ProjectUpdate};
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::{classify, StoreError};
use crate::models::project::Project;
use crate::store::ProjectStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, repo_link, live_site_link";

/// PostgreSQL-backed [`ProjectStore`].
#[derive(Debug, Clone)]
pub struct ProjectRepo {
    pool: PgPool,
}

impl ProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for ProjectRepo {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify(e, None))
    }

    async fn insert(&self, input: &NewProject) -> Result<Project, StoreError> {
        let query = format!(
            "INSERT INTO projects (name, repo_link, live_site_link)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.repo_link)
            .bind(&input.live_site_link)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(e, Some(&input.name)))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, None))
    }

    async fn merge_update(&self, id: DbId, update: &ProjectUpdate) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE projects SET
                repo_link = COALESCE($2, repo_link),
                live_site_link = COALESCE($3, live_site_link)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&update.repo_link)
        .bind(&update.live_site_link)
        .execute(&self.pool)
        .await
        .map_err(|e| classify(e, None))?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: DbId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, None))?;
        Ok(result.rows_affected())
    }
}
