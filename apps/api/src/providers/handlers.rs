//! Axum route handlers for the Provider Configuration API.
//!
//! Provider settings are read from the store per request and passed
//! around as explicit values — no process-global mutable config.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::provider::{AiProvider, ProviderSettings};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProviderEntry {
    pub provider: AiProvider,
    pub settings: ProviderSettings,
}

#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<ProviderEntry>,
}

/// GET /api/v1/config/providers
///
/// All known providers in fixed enum order, whether configured or not.
pub async fn handle_get_providers(
    State(state): State<AppState>,
) -> Result<Json<ProvidersResponse>, AppError> {
    let config = state.store.providers().await;
    let providers = AiProvider::ALL
        .iter()
        .map(|&provider| ProviderEntry {
            provider,
            settings: config.get(provider).clone(),
        })
        .collect();
    Ok(Json(ProvidersResponse { providers }))
}

/// PUT /api/v1/config/providers/:provider
pub async fn handle_put_provider(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Json(settings): Json<ProviderSettings>,
) -> Result<StatusCode, AppError> {
    let provider = AiProvider::parse(&provider)
        .ok_or_else(|| AppError::Validation(format!("Unknown AI provider '{provider}'")))?;
    state.store.set_provider(provider, settings).await?;
    tracing::info!("Provider settings updated for {}", provider.as_str());
    Ok(StatusCode::NO_CONTENT)
}
