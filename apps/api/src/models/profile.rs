use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationPreference {
    Northeast,
    Southeast,
    Midwest,
    West,
    Any,
}

impl FromStr for LocationPreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "northeast" => Ok(Self::Northeast),
            "southeast" => Ok(Self::Southeast),
            "midwest" => Ok(Self::Midwest),
            "west" => Ok(Self::West),
            "any" => Ok(Self::Any),
            _ => Err(()),
        }
    }
}

/// Financial-aid need tier. `FullPay` is stored as "none" (no aid needed).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    High,
    Medium,
    Low,
    #[serde(rename = "none")]
    FullPay,
}

impl FromStr for BudgetTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "none" => Ok(Self::FullPay),
            _ => Err(()),
        }
    }
}

/// Academic and preference attributes of one applicant.
/// Every attribute is optional; scoring tolerates partial profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub gpa: Option<f64>,
    pub sat_score: Option<i32>,
    pub act_score: Option<i32>,
    pub intended_major: Option<String>,
    pub interests: Vec<String>,
    pub extracurriculars: Vec<String>,
    pub location_preference: Option<LocationPreference>,
    pub budget_range: Option<BudgetTier>,
}

/// Raw `profiles` row. Enum columns are free text in the table.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub gpa: Option<f64>,
    pub sat_score: Option<i32>,
    pub act_score: Option<i32>,
    pub intended_major: Option<String>,
    pub interests: Vec<String>,
    pub extracurriculars: Vec<String>,
    pub location_preference: Option<String>,
    pub budget_range: Option<String>,
}

impl From<ProfileRow> for Profile {
    /// Unrecognised enum strings become `None` instead of failing the read.
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            gpa: row.gpa,
            sat_score: row.sat_score,
            act_score: row.act_score,
            intended_major: row
                .intended_major
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
            interests: row.interests,
            extracurriculars: row.extracurriculars,
            location_preference: row
                .location_preference
                .as_deref()
                .and_then(|s| s.parse().ok()),
            budget_range: row.budget_range.as_deref().and_then(|s| s.parse().ok()),
        }
    }
}
