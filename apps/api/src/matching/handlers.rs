//! Axum route handlers for recommendations and milestones.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::matching::milestones::{summarize_progress, MilestoneProgress};
use crate::models::milestone::Milestone;
use crate::models::recommendation::{Category, SavedRecommendation};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub success: bool,
    pub count: usize,
    pub milestones_seeded: bool,
}

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct CategoryTally {
    pub reach: usize,
    pub target: usize,
    pub safety: usize,
}

#[derive(Debug, Serialize)]
pub struct RecommendationListResponse {
    pub recommendations: Vec<SavedRecommendation>,
    pub tally: CategoryTally,
}

#[derive(Debug, Serialize)]
pub struct MilestoneListResponse {
    pub milestones: Vec<Milestone>,
    #[serde(flatten)]
    pub progress: MilestoneProgress,
}

#[derive(Debug, Deserialize)]
pub struct MilestoneUpdate {
    pub completed: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations/run
///
/// Recomputes the caller's recommendation set against the full catalog.
pub async fn handle_run_recommendations(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<RunResponse>, AppError> {
    let summary = state.engine.run(caller.user_id, Utc::now()).await?;

    Ok(Json(RunResponse {
        success: true,
        count: summary.count,
        milestones_seeded: summary.milestones_seeded,
    }))
}

/// GET /api/v1/recommendations
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<RecommendationListResponse>, AppError> {
    let recommendations = state
        .recommendations
        .list_recommendations(caller.user_id)
        .await?;
    let tally = tally_categories(&recommendations);

    Ok(Json(RecommendationListResponse {
        recommendations,
        tally,
    }))
}

/// GET /api/v1/milestones
pub async fn handle_list_milestones(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<MilestoneListResponse>, AppError> {
    let milestones = state.profiles.list_milestones(caller.user_id).await?;
    let progress = summarize_progress(&milestones);

    Ok(Json(MilestoneListResponse {
        milestones,
        progress,
    }))
}

/// PATCH /api/v1/milestones/:id
///
/// Marks a milestone complete (stamping `completed_at`) or reopens it.
/// Malformed ids and bodies come back as `BAD_REQUEST` in the usual error shape.
pub async fn handle_update_milestone(
    State(state): State<AppState>,
    caller: CallerIdentity,
    milestone_id: Result<Path<Uuid>, PathRejection>,
    update: Result<Json<MilestoneUpdate>, JsonRejection>,
) -> Result<Json<Milestone>, AppError> {
    let Path(milestone_id) = milestone_id?;
    let Json(update) = update?;
    let completed_at = update.completed.then(Utc::now);

    let milestone = state
        .profiles
        .set_milestone_completed(caller.user_id, milestone_id, completed_at)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Milestone {milestone_id} not found")))?;

    Ok(Json(milestone))
}

fn tally_categories(recommendations: &[SavedRecommendation]) -> CategoryTally {
    recommendations
        .iter()
        .fold(CategoryTally::default(), |mut tally, r| {
            match r.category {
                Category::Reach => tally.reach += 1,
                Category::Target => tally.target += 1,
                Category::Safety => tally.safety += 1,
            }
            tally
        })
}
