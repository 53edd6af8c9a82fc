//! Persistence seams for the recommendation engine.
//!
//! Production: `PgStore` backs all three traits against Postgres.
//! Tests: `memory::MemoryStore` keeps everything in process.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::college::College;
use crate::models::milestone::{Milestone, NewMilestone};
use crate::models::profile::Profile;
use crate::models::recommendation::{Recommendation, SavedRecommendation};

pub use postgres::PgStore;

/// Applicant profiles and their milestone checklist.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn fetch_profile(&self, profile_id: Uuid) -> Result<Option<Profile>, AppError>;

    async fn has_milestones(&self, profile_id: Uuid) -> Result<bool, AppError>;

    async fn insert_milestones(&self, milestones: &[NewMilestone]) -> Result<(), AppError>;

    /// Ordered by deadline, earliest first.
    async fn list_milestones(&self, profile_id: Uuid) -> Result<Vec<Milestone>, AppError>;

    /// Returns `None` when the milestone does not exist or belongs to another profile.
    async fn set_milestone_completed(
        &self,
        profile_id: Uuid,
        milestone_id: Uuid,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Milestone>, AppError>;
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn fetch_colleges(&self) -> Result<Vec<College>, AppError>;
}

#[async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Deletes every stored recommendation for the profile and inserts `recommendations`
    /// as one unit. Readers never observe a mix of old and new rows.
    async fn replace_recommendations(
        &self,
        profile_id: Uuid,
        recommendations: &[Recommendation],
    ) -> Result<(), AppError>;

    /// Ordered by match score, highest first.
    async fn list_recommendations(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<SavedRecommendation>, AppError>;
}
