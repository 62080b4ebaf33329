//! Handlers for the `/projects` resource.
//!
//! Each handler validates its input, makes exactly one call on the
//! [`ProjectStore`](folio_db::ProjectStore) gateway, and maps the outcome
//! to a response. Error-to-status mapping lives in [`crate::error`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::project::{NewProjectPayload, ProjectUpdate};
use folio_core::validation::{validate_new_project, validate_project_update, Validation};
use folio_db::models::project::Project;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, ProjectId};
use crate::state::AppState;

const ENTITY: &str = "Project";

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.projects.list().await?;
    Ok(Json(projects))
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewProjectPayload>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let input = match validate_new_project(payload) {
        Validation::Valid(input) => input,
        Validation::Invalid(violations) => return Err(AppError::Validation(violations)),
    };

    let project = state.projects.insert(&input).await?;

    tracing::info!(project_id = project.id, name = %project.name, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> AppResult<Json<Project>> {
    let project = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(project))
}

/// PATCH /projects/{id}
///
/// Links absent from the body keep their stored value. Responds 204 whether
/// or not a row matched.
pub async fn update(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
    JsonBody(payload): JsonBody<ProjectUpdate>,
) -> AppResult<StatusCode> {
    let update = match validate_project_update(payload) {
        Validation::Valid(update) => update,
        Validation::Invalid(violations) => return Err(AppError::Validation(violations)),
    };

    let affected = state.projects.merge_update(id, &update).await?;
    if affected == 0 {
        tracing::debug!(project_id = id, "Update matched no project");
    } else {
        tracing::info!(project_id = id, "Project updated");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> AppResult<StatusCode> {
    let affected = state.projects.delete(id).await?;
    if affected == 0 {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }

    tracing::info!(project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
