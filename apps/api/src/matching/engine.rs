//! Recommendation run: score every catalog college for one profile and replace
//! the profile's stored recommendation set.
//!
//! Flow: fetch profile → fetch catalog → score / categorize / annotate →
//!       sort by score → replace stored set → seed milestones on first run.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::category::categorize;
use crate::matching::config::MatchConfig;
use crate::matching::milestones::initial_milestones;
use crate::matching::rationale::build_gap_notes;
use crate::matching::score::compute_match_score;
use crate::models::college::College;
use crate::models::profile::Profile;
use crate::models::recommendation::Recommendation;
use crate::store::{CatalogStore, ProfileStore, RecommendationStore};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunSummary {
    pub count: usize,
    pub milestones_seeded: bool,
}

/// Scores a profile against the catalog. Stores are shared with the dashboard handlers.
#[derive(Clone)]
pub struct RecommendationEngine {
    profiles: Arc<dyn ProfileStore>,
    catalog: Arc<dyn CatalogStore>,
    recommendations: Arc<dyn RecommendationStore>,
    config: MatchConfig,
}

impl RecommendationEngine {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        catalog: Arc<dyn CatalogStore>,
        recommendations: Arc<dyn RecommendationStore>,
        config: MatchConfig,
    ) -> Self {
        Self {
            profiles,
            catalog,
            recommendations,
            config,
        }
    }

    /// Runs a full recommendation pass for `profile_id`.
    ///
    /// Fails with `ProfileNotFound`, `CatalogUnavailable` or `Persistence`.
    /// Milestone seeding never fails the run.
    pub async fn run(&self, profile_id: Uuid, now: DateTime<Utc>) -> Result<RunSummary, AppError> {
        info!("Generating recommendations for profile {profile_id}");

        let profile = self
            .profiles
            .fetch_profile(profile_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        let colleges = self
            .catalog
            .fetch_colleges()
            .await
            .map_err(|e| AppError::CatalogUnavailable(e.to_string()))?;
        info!("Scoring {} colleges for profile {profile_id}", colleges.len());

        let recommendations = rank_colleges(&profile, &colleges, &self.config);

        self.recommendations
            .replace_recommendations(profile_id, &recommendations)
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        let milestones_seeded = self.seed_milestones_if_missing(profile_id, now).await;

        info!(
            "Saved {} recommendations for profile {profile_id} (milestones seeded: {milestones_seeded})",
            recommendations.len()
        );

        Ok(RunSummary {
            count: recommendations.len(),
            milestones_seeded,
        })
    }

    /// Best-effort: failures are logged and reported as `false`.
    async fn seed_milestones_if_missing(&self, profile_id: Uuid, now: DateTime<Utc>) -> bool {
        match self.profiles.has_milestones(profile_id).await {
            Ok(true) => return false,
            Ok(false) => {}
            Err(e) => {
                warn!("Skipping milestone seeding for profile {profile_id}: {e}");
                return false;
            }
        }

        let milestones = initial_milestones(profile_id, now);
        match self.profiles.insert_milestones(&milestones).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to seed milestones for profile {profile_id}: {e}");
                false
            }
        }
    }
}

/// One recommendation per college, highest score first. Ties keep catalog order.
pub fn rank_colleges<'a>(
    profile: &Profile,
    colleges: impl IntoIterator<Item = &'a College>,
    config: &MatchConfig,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = colleges
        .into_iter()
        .map(|college| {
            let match_score = compute_match_score(profile, college, config);
            let category = categorize(profile, college, config);
            Recommendation {
                college_id: college.id,
                category,
                match_score,
                notes: build_gap_notes(profile, college, category, config),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    recommendations
}
