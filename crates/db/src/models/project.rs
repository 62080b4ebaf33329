//! Project entity model.

use folio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `projects` table. Serialized with the camelCase wire names.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub repo_link: Option<String>,
    pub live_site_link: Option<String>,
}
