use std::sync::Arc;

use crate::auth::AuthVerifier;
use crate::matching::engine::RecommendationEngine;
use crate::store::{ProfileStore, RecommendationStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub engine: RecommendationEngine,
    /// Read/update access for the dashboard endpoints. Same backing store as the engine.
    pub profiles: Arc<dyn ProfileStore>,
    pub recommendations: Arc<dyn RecommendationStore>,
    /// Pluggable token verifier. Default: HostedAuthVerifier.
    pub auth: Arc<dyn AuthVerifier>,
}
