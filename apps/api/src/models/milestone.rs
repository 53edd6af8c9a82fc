use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Deadline-tracked checklist item on the applicant's dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Milestone {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub deadline: DateTime<Utc>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Milestone to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMilestone {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub deadline: DateTime<Utc>,
}
