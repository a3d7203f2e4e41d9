//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::project::ProjectSuggestion;
use crate::recommend::scorer::RecommendRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub suggestions: Vec<ProjectSuggestion>,
}

/// POST /api/v1/recommendations
///
/// Ranks the catalog against the submitted profile. An empty skill
/// list is not an error — it produces an empty suggestion list.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let suggestions = state.recommender.recommend(&request).await?;
    Ok(Json(RecommendResponse { suggestions }))
}
