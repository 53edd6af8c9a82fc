use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// Relative admission-likelihood tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Reach,
    Target,
    Safety,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Reach => "reach",
            Category::Target => "target",
            Category::Safety => "safety",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown recommendation category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reach" => Ok(Category::Reach),
            "target" => Ok(Category::Target),
            "safety" => Ok(Category::Safety),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A freshly computed recommendation for one (profile, college) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub college_id: Uuid,
    pub category: Category,
    pub match_score: u8, // 0 – 100
    pub notes: String,
}

/// A stored recommendation joined with its college, as shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedRecommendation {
    pub college_id: Uuid,
    pub college_name: String,
    pub website: Option<String>,
    #[sqlx(try_from = "String")]
    pub category: Category,
    pub match_score: i32,
    pub notes: Option<String>,
}
