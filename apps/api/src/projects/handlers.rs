//! Axum route handlers for the Saved Projects API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::project::ProjectSuggestion;
use crate::projects::reviews::display_rating;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SavedProjectsResponse {
    pub projects: Vec<ProjectSuggestion>,
}

#[derive(Debug, Serialize)]
pub struct SavedProjectDetail {
    pub average_rating: f64,
    pub review_count: usize,
    #[serde(flatten)]
    pub project: ProjectSuggestion,
}

/// GET /api/v1/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<SavedProjectsResponse>, AppError> {
    let projects = state.store.saved_projects().await;
    Ok(Json(SavedProjectsResponse { projects }))
}

/// POST /api/v1/projects
///
/// Copies a suggestion into the persisted list, keyed by its generated
/// id. A duplicate id is rejected with prior state unchanged.
pub async fn handle_save_project(
    State(state): State<AppState>,
    Json(suggestion): Json<ProjectSuggestion>,
) -> Result<StatusCode, AppError> {
    if suggestion.id.trim().is_empty() {
        return Err(AppError::Validation("project id cannot be empty".to_string()));
    }
    let inserted = state.store.save_project(suggestion).await?;
    if !inserted {
        return Err(AppError::Validation("project is already saved".to_string()));
    }
    Ok(StatusCode::CREATED)
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedProjectDetail>, AppError> {
    let project = state
        .store
        .saved_project(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Saved project {id} not found")))?;

    Ok(Json(SavedProjectDetail {
        average_rating: display_rating(&project.reviews),
        review_count: project.reviews.len(),
        project,
    }))
}

/// DELETE /api/v1/projects/:id
///
/// Removes the project from the persisted list only.
pub async fn handle_delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let existed = state.store.delete_project(&id).await?;
    if !existed {
        return Err(AppError::NotFound(format!("Saved project {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
