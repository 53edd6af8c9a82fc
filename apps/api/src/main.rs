mod auth;
mod config;
mod db;
mod errors;
mod matching;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::HostedAuthVerifier;
use crate::config::Config;
use crate::db::create_pool;
use crate::matching::config::MatchConfig;
use crate::matching::engine::RecommendationEngine;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(default_log_directive(&config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting College Planner API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    let store = Arc::new(PgStore::new(db));

    // Initialize token verification against the hosted auth platform
    let auth = Arc::new(HostedAuthVerifier::new(
        &config.auth_url,
        config.auth_service_key.clone(),
    )?);
    info!("Auth verifier initialized ({})", config.auth_url);

    let match_config = MatchConfig::default();
    info!(
        "Match config: base {} / safety ratio {} / reach ratio {}",
        match_config.weights.base,
        match_config.margins.safety_ratio,
        match_config.margins.reach_ratio
    );

    // Build app state
    let state = AppState {
        engine: RecommendationEngine::new(
            store.clone(),
            store.clone(),
            store.clone(),
            match_config,
        ),
        profiles: store.clone(),
        recommendations: store,
        auth,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Crate logs plus `tower_http`, where `TraceLayer` emits its request events.
fn default_log_directive(level: &str) -> String {
    format!("{}={level},tower_http={level}", env!("CARGO_CRATE_NAME"))
}
