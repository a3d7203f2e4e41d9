//! Axum route handlers for the Profile API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::skill::Skill;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceSkillsRequest {
    pub skills: Vec<Skill>,
}

/// GET /api/v1/profile/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
) -> Result<Json<SkillListResponse>, AppError> {
    Ok(Json(SkillListResponse {
        skills: state.store.skills().await,
    }))
}

/// PUT /api/v1/profile/skills
///
/// Whole-list replace, last write wins. A validation failure leaves
/// the stored list unchanged.
pub async fn handle_replace_skills(
    State(state): State<AppState>,
    Json(request): Json<ReplaceSkillsRequest>,
) -> Result<StatusCode, AppError> {
    if request.skills.iter().any(|s| s.name.trim().is_empty()) {
        return Err(AppError::Validation(
            "skill name cannot be empty".to_string(),
        ));
    }
    state.store.replace_skills(request.skills).await?;
    Ok(StatusCode::NO_CONTENT)
}
