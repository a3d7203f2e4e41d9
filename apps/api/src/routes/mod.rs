pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::profile;
use crate::projects;
use crate::providers;
use crate::recommend;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(recommend::handlers::handle_recommend),
        )
        // Profile API
        .route(
            "/api/v1/profile/skills",
            get(profile::handlers::handle_get_skills)
                .put(profile::handlers::handle_replace_skills),
        )
        // Saved Projects API
        .route(
            "/api/v1/projects",
            get(projects::handlers::handle_list_projects)
                .post(projects::handlers::handle_save_project),
        )
        .route(
            "/api/v1/projects/:id",
            get(projects::handlers::handle_get_project)
                .delete(projects::handlers::handle_delete_project),
        )
        .route(
            "/api/v1/projects/:id/reviews",
            get(projects::reviews::handle_list_reviews)
                .post(projects::reviews::handle_create_review),
        )
        // Provider Configuration API
        .route(
            "/api/v1/config/providers",
            get(providers::handlers::handle_get_providers),
        )
        .route(
            "/api/v1/config/providers/:provider",
            put(providers::handlers::handle_put_provider),
        )
        .with_state(state)
}
