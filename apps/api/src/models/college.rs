use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Catalog record. Read-only input to scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct College {
    pub id: Uuid,
    pub name: String,
    pub avg_gpa: Option<f64>,
    pub avg_sat: Option<i32>,
    pub avg_act: Option<i32>,
    pub tuition: Option<i32>,
    pub majors: Vec<String>,
    pub website: Option<String>,
}
