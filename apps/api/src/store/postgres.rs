use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::college::College;
use crate::models::milestone::{Milestone, NewMilestone};
use crate::models::profile::{Profile, ProfileRow};
use crate::models::recommendation::{Recommendation, SavedRecommendation};
use crate::store::{CatalogStore, ProfileStore, RecommendationStore};

/// Postgres-backed store for profiles, the college catalog and recommendations.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn fetch_profile(&self, profile_id: Uuid) -> Result<Option<Profile>, AppError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, gpa, sat_score, act_score, intended_major,
                   COALESCE(interests, '{}') AS interests,
                   COALESCE(extracurriculars, '{}') AS extracurriculars,
                   location_preference, budget_range
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Profile::from))
    }

    async fn has_milestones(&self, profile_id: Uuid) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM progress_milestones WHERE user_id = $1)",
        )
        .bind(profile_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn insert_milestones(&self, milestones: &[NewMilestone]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for m in milestones {
            sqlx::query(
                r#"
                INSERT INTO progress_milestones
                    (id, user_id, title, description, category, deadline, completed)
                VALUES ($1, $2, $3, $4, $5, $6, FALSE)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(m.user_id)
            .bind(&m.title)
            .bind(&m.description)
            .bind(&m.category)
            .bind(m.deadline)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn list_milestones(&self, profile_id: Uuid) -> Result<Vec<Milestone>, AppError> {
        Ok(sqlx::query_as::<_, Milestone>(
            r#"
            SELECT id, user_id, title, description, category, deadline, completed, completed_at
            FROM progress_milestones
            WHERE user_id = $1
            ORDER BY deadline ASC
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn set_milestone_completed(
        &self,
        profile_id: Uuid,
        milestone_id: Uuid,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Milestone>, AppError> {
        Ok(sqlx::query_as::<_, Milestone>(
            r#"
            UPDATE progress_milestones
            SET completed = $1, completed_at = $2
            WHERE id = $3 AND user_id = $4
            RETURNING id, user_id, title, description, category, deadline, completed, completed_at
            "#,
        )
        .bind(completed_at.is_some())
        .bind(completed_at)
        .bind(milestone_id)
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await?)
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    async fn fetch_colleges(&self) -> Result<Vec<College>, AppError> {
        let colleges = sqlx::query_as::<_, College>(
            r#"
            SELECT id, name, avg_gpa, avg_sat, avg_act, tuition,
                   COALESCE(majors, '{}') AS majors, website
            FROM colleges
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} colleges from catalog", colleges.len());
        Ok(colleges)
    }
}

#[async_trait]
impl RecommendationStore for PgStore {
    async fn replace_recommendations(
        &self,
        profile_id: Uuid,
        recommendations: &[Recommendation],
    ) -> Result<(), AppError> {
        let college_ids: Vec<Uuid> = recommendations.iter().map(|r| r.college_id).collect();
        let categories: Vec<String> = recommendations
            .iter()
            .map(|r| r.category.to_string())
            .collect();
        let scores: Vec<i32> = recommendations
            .iter()
            .map(|r| i32::from(r.match_score))
            .collect();
        let notes: Vec<String> = recommendations.iter().map(|r| r.notes.clone()).collect();

        // Delete-then-insert in one transaction so the set is swapped atomically.
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM user_colleges WHERE user_id = $1")
            .bind(profile_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query(
            r#"
            INSERT INTO user_colleges (user_id, college_id, category, match_score, notes)
            SELECT $1, college_id, category, match_score, notes
            FROM UNNEST($2::uuid[], $3::text[], $4::int4[], $5::text[])
                AS t(college_id, category, match_score, notes)
            "#,
        )
        .bind(profile_id)
        .bind(&college_ids)
        .bind(&categories)
        .bind(&scores)
        .bind(&notes)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            "Replaced {deleted} recommendations with {} for profile {profile_id}",
            recommendations.len()
        );
        Ok(())
    }

    async fn list_recommendations(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<SavedRecommendation>, AppError> {
        Ok(sqlx::query_as::<_, SavedRecommendation>(
            r#"
            SELECT uc.college_id, c.name AS college_name, c.website,
                   uc.category, uc.match_score, uc.notes
            FROM user_colleges uc
            JOIN colleges c ON c.id = uc.college_id
            WHERE uc.user_id = $1
            ORDER BY uc.match_score DESC, c.name ASC
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
