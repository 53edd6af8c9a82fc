use serde::{Deserialize, Serialize};

use crate::matching::metrics::Metric;

/// Point weights for the additive match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub base: f64,
    /// Max GPA points and points lost per 1.0 of GPA gap.
    pub gpa_max: f64,
    pub gpa_gap_penalty: f64,
    /// Max SAT points; one point is lost per `sat_gap_divisor` SAT points of gap.
    pub sat_max: f64,
    pub sat_gap_divisor: f64,
    pub act_max: f64,
    pub act_gap_penalty: f64,
    pub major_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 50.0,
            gpa_max: 20.0,
            gpa_gap_penalty: 40.0,
            sat_max: 15.0,
            sat_gap_divisor: 20.0,
            act_max: 15.0,
            act_gap_penalty: 3.0,
            major_bonus: 10.0,
        }
    }
}

/// How far above the college average an applicant must be for a metric to count as "above".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMargins {
    pub gpa: f64,
    pub sat: f64,
    pub act: f64,
    pub safety_ratio: f64,
    pub reach_ratio: f64,
}

impl CategoryMargins {
    pub fn for_metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Gpa => self.gpa,
            Metric::Sat => self.sat,
            Metric::Act => self.act,
        }
    }
}

impl Default for CategoryMargins {
    fn default() -> Self {
        Self {
            gpa: 0.15,
            sat: 80.0,
            act: 2.0,
            safety_ratio: 0.67,
            reach_ratio: 0.33,
        }
    }
}

/// Gap sizes above which the rationale mentions a metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteThresholds {
    pub gpa: f64,
    pub sat: f64,
}

impl Default for NoteThresholds {
    fn default() -> Self {
        Self {
            gpa: 0.2,
            sat: 50.0,
        }
    }
}

/// Every constant the matcher uses. `Default` is the production tuning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchConfig {
    pub weights: ScoreWeights,
    pub margins: CategoryMargins,
    pub notes: NoteThresholds,
}
