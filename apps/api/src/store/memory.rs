use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::college::College;
use crate::models::milestone::{Milestone, NewMilestone};
use crate::models::profile::Profile;
use crate::models::recommendation::{Recommendation, SavedRecommendation};
use crate::store::{CatalogStore, ProfileStore, RecommendationStore};

/// In-process store with switchable failure points.
#[derive(Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<Uuid, Profile>>,
    colleges: Mutex<Vec<College>>,
    recommendations: Mutex<HashMap<Uuid, Vec<Recommendation>>>,
    milestones: Mutex<Vec<Milestone>>,
    pub fail_catalog: bool,
    pub fail_replace: bool,
    pub fail_milestones: bool,
}

impl MemoryStore {
    pub fn with_data(profiles: Vec<Profile>, colleges: Vec<College>) -> Self {
        let store = Self::default();
        {
            let mut map = store.profiles.lock().unwrap();
            for profile in profiles {
                map.insert(profile.id, profile);
            }
        }
        *store.colleges.lock().unwrap() = colleges;
        store
    }

    pub fn stored_recommendations(&self, profile_id: Uuid) -> Vec<Recommendation> {
        self.recommendations
            .lock()
            .unwrap()
            .get(&profile_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn milestone_count(&self, profile_id: Uuid) -> usize {
        self.milestones
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.user_id == profile_id)
            .count()
    }
}

fn failure(what: &str) -> AppError {
    AppError::Internal(anyhow::anyhow!("simulated {what} failure"))
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn fetch_profile(&self, profile_id: Uuid) -> Result<Option<Profile>, AppError> {
        Ok(self.profiles.lock().unwrap().get(&profile_id).cloned())
    }

    async fn has_milestones(&self, profile_id: Uuid) -> Result<bool, AppError> {
        if self.fail_milestones {
            return Err(failure("milestone lookup"));
        }
        Ok(self.milestone_count(profile_id) > 0)
    }

    async fn insert_milestones(&self, milestones: &[NewMilestone]) -> Result<(), AppError> {
        if self.fail_milestones {
            return Err(failure("milestone insert"));
        }
        let mut stored = self.milestones.lock().unwrap();
        stored.extend(milestones.iter().map(|m| Milestone {
            id: Uuid::new_v4(),
            user_id: m.user_id,
            title: m.title.clone(),
            description: Some(m.description.clone()),
            category: m.category.clone(),
            deadline: m.deadline,
            completed: false,
            completed_at: None,
        }));
        Ok(())
    }

    async fn list_milestones(&self, profile_id: Uuid) -> Result<Vec<Milestone>, AppError> {
        let mut milestones: Vec<Milestone> = self
            .milestones
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.user_id == profile_id)
            .cloned()
            .collect();
        milestones.sort_by_key(|m| m.deadline);
        Ok(milestones)
    }

    async fn set_milestone_completed(
        &self,
        profile_id: Uuid,
        milestone_id: Uuid,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Milestone>, AppError> {
        let mut stored = self.milestones.lock().unwrap();
        Ok(stored
            .iter_mut()
            .find(|m| m.id == milestone_id && m.user_id == profile_id)
            .map(|m| {
                m.completed = completed_at.is_some();
                m.completed_at = completed_at;
                m.clone()
            }))
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn fetch_colleges(&self) -> Result<Vec<College>, AppError> {
        if self.fail_catalog {
            return Err(failure("catalog"));
        }
        Ok(self.colleges.lock().unwrap().clone())
    }
}

#[async_trait]
impl RecommendationStore for MemoryStore {
    async fn replace_recommendations(
        &self,
        profile_id: Uuid,
        recommendations: &[Recommendation],
    ) -> Result<(), AppError> {
        if self.fail_replace {
            return Err(failure("recommendation insert"));
        }
        self.recommendations
            .lock()
            .unwrap()
            .insert(profile_id, recommendations.to_vec());
        Ok(())
    }

    async fn list_recommendations(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<SavedRecommendation>, AppError> {
        let colleges = self.colleges.lock().unwrap();
        let mut saved: Vec<SavedRecommendation> = self
            .stored_recommendations(profile_id)
            .into_iter()
            .filter_map(|r| {
                let college = colleges.iter().find(|c| c.id == r.college_id)?;
                Some(SavedRecommendation {
                    college_id: r.college_id,
                    college_name: college.name.clone(),
                    website: college.website.clone(),
                    category: r.category,
                    match_score: i32::from(r.match_score),
                    notes: Some(r.notes),
                })
            })
            .collect();
        saved.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        Ok(saved)
    }
}
