use std::sync::Arc;

use crate::recommend::scorer::Recommender;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Local JSON-blob store: saved projects, profile skills, provider settings.
    pub store: Store,
    /// Pluggable recommender. Default: CatalogRecommender over the compiled-in catalog.
    pub recommender: Arc<dyn Recommender>,
}
