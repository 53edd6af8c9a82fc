pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation engine
        .route(
            "/api/v1/recommendations/run",
            post(handlers::handle_run_recommendations),
        )
        .route(
            "/api/v1/recommendations",
            get(handlers::handle_list_recommendations),
        )
        // Dashboard checklist
        .route("/api/v1/milestones", get(handlers::handle_list_milestones))
        .route(
            "/api/v1/milestones/:id",
            patch(handlers::handle_update_milestone),
        )
        .with_state(state)
}
