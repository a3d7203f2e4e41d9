//! Review aggregation and the review endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::ProjectReview;
use crate::state::AppState;

/// Arithmetic mean of the ratings, 0.0 for an empty list. No
/// weighting, no outlier handling.
pub fn average_rating(reviews: &[ProjectReview]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: f64 = reviews.iter().map(|r| f64::from(r.rating)).sum();
    sum / reviews.len() as f64
}

/// Average rounded to one decimal, the form the UI displays.
pub fn display_rating(reviews: &[ProjectReview]) -> f64 {
    (average_rating(reviews) * 10.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub user_id: Uuid,
    pub display_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<ProjectReview>,
    pub average_rating: f64,
}

/// GET /api/v1/projects/:id/reviews
pub async fn handle_list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReviewListResponse>, AppError> {
    let project = state
        .store
        .saved_project(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Saved project {id} not found")))?;

    Ok(Json(ReviewListResponse {
        average_rating: display_rating(&project.reviews),
        reviews: project.reviews,
    }))
}

/// POST /api/v1/projects/:id/reviews
///
/// Appends a review. A rejected review leaves the project unchanged.
pub async fn handle_create_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ProjectReview>), AppError> {
    if !(1..=5).contains(&request.rating) {
        return Err(AppError::Validation(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    if request.display_name.trim().is_empty() {
        return Err(AppError::Validation(
            "display_name cannot be empty".to_string(),
        ));
    }

    let review = ProjectReview {
        user_id: request.user_id,
        display_name: request.display_name,
        rating: request.rating,
        comment: request.comment,
        created_at: Utc::now(),
    };

    state
        .store
        .append_review(&id, review.clone())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Saved project {id} not found")))?;

    Ok((StatusCode::CREATED, Json(review)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> ProjectReview {
        ProjectReview {
            user_id: Uuid::new_v4(),
            display_name: "Grace".to_string(),
            rating,
            comment: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_list_averages_to_zero() {
        assert_eq!(average_rating(&[]), 0.0);
        assert_eq!(display_rating(&[]), 0.0);
    }

    #[test]
    fn test_four_and_two_average_to_three() {
        let reviews = vec![review(4), review(2)];
        assert_eq!(average_rating(&reviews), 3.0);
    }

    #[test]
    fn test_display_rating_rounds_to_one_decimal() {
        // 13 / 3 = 4.333... → 4.3
        let reviews = vec![review(5), review(4), review(4)];
        assert_eq!(display_rating(&reviews), 4.3);
        // 14 / 3 = 4.666... → 4.7
        let reviews = vec![review(5), review(5), review(4)];
        assert_eq!(display_rating(&reviews), 4.7);
    }
}
