//! Match score: a 0–100 heuristic of academic fit between an applicant and a college.
//!
//! Purely additive and order-independent:
//! base + GPA closeness + SAT closeness + ACT closeness + major bonus,
//! clamped to [0, 100] and rounded. Missing inputs contribute nothing.

use crate::matching::config::{MatchConfig, ScoreWeights};
use crate::matching::metrics::Metric;
use crate::models::college::College;
use crate::models::profile::Profile;

pub fn compute_match_score(profile: &Profile, college: &College, config: &MatchConfig) -> u8 {
    let weights = &config.weights;
    let mut score = weights.base;

    for metric in Metric::ALL {
        if let Some((applicant, average)) = metric.pair(profile, college) {
            score += metric_points(metric, (applicant - average).abs(), weights);
        }
    }

    if offers_intended_major(profile, college) {
        score += weights.major_bonus;
    }

    score.clamp(0.0, 100.0).round() as u8
}

/// Closeness points for one metric given the absolute gap. Never negative.
pub fn metric_points(metric: Metric, gap: f64, weights: &ScoreWeights) -> f64 {
    let points = match metric {
        Metric::Gpa => weights.gpa_max - gap * weights.gpa_gap_penalty,
        Metric::Sat => weights.sat_max - gap / weights.sat_gap_divisor,
        Metric::Act => weights.act_max - gap * weights.act_gap_penalty,
    };
    points.max(0.0)
}

/// Exact string membership; no fuzzy matching.
fn offers_intended_major(profile: &Profile, college: &College) -> bool {
    match profile.intended_major.as_deref() {
        Some(major) if !major.is_empty() => college.majors.iter().any(|m| m == major),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(gpa: Option<f64>, sat: Option<i32>, act: Option<i32>) -> Profile {
        Profile {
            gpa,
            sat_score: sat,
            act_score: act,
            ..Default::default()
        }
    }

    fn college(gpa: Option<f64>, sat: Option<i32>, act: Option<i32>, majors: &[&str]) -> College {
        College {
            name: "Test College".to_string(),
            avg_gpa: gpa,
            avg_sat: sat,
            avg_act: act,
            majors: majors.iter().map(|m| m.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_comparable_fields_scores_base() {
        let config = MatchConfig::default();
        let score = compute_match_score(
            &profile(None, None, None),
            &college(Some(3.7), Some(1400), Some(31), &[]),
            &config,
        );
        assert_eq!(score, 50);
    }

    #[test]
    fn test_worked_example_rounds_to_75() {
        // GPA gap 0.2 → 12 points, SAT gap 50 → 12.5 points, 74.5 rounds up
        let config = MatchConfig::default();
        let score = compute_match_score(
            &profile(Some(3.9), Some(1450), None),
            &college(Some(3.7), Some(1400), None, &[]),
            &config,
        );
        assert_eq!(score, 75);
    }

    #[test]
    fn test_gpa_contribution_zero_at_half_point_gap() {
        let w = ScoreWeights::default();
        assert_eq!(metric_points(Metric::Gpa, 0.5, &w), 0.0);
        assert_eq!(metric_points(Metric::Gpa, 0.9, &w), 0.0);
        assert!(metric_points(Metric::Gpa, 0.45, &w) > 0.0);
    }

    #[test]
    fn test_sat_contribution_zero_at_300_gap() {
        let w = ScoreWeights::default();
        assert_eq!(metric_points(Metric::Sat, 300.0, &w), 0.0);
        assert_eq!(metric_points(Metric::Sat, 450.0, &w), 0.0);
        assert!((metric_points(Metric::Sat, 280.0, &w) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_act_contribution_zero_at_5_gap() {
        let w = ScoreWeights::default();
        assert_eq!(metric_points(Metric::Act, 5.0, &w), 0.0);
        assert_eq!(metric_points(Metric::Act, 4.0, &w), 3.0);
    }

    #[test]
    fn test_large_gaps_add_nothing() {
        let config = MatchConfig::default();
        let score = compute_match_score(
            &profile(Some(2.5), Some(1000), Some(20)),
            &college(Some(3.9), Some(1500), Some(34), &[]),
            &config,
        );
        assert_eq!(score, 50);
    }

    #[test]
    fn test_major_bonus_requires_exact_match() {
        let config = MatchConfig::default();
        let mut applicant = profile(None, None, None);
        applicant.intended_major = Some("Computer Science".to_string());

        let exact = college(None, None, None, &["Computer Science", "Physics"]);
        let fuzzy = college(None, None, None, &["computer science"]);

        assert_eq!(compute_match_score(&applicant, &exact, &config), 60);
        assert_eq!(compute_match_score(&applicant, &fuzzy, &config), 50);
    }

    #[test]
    fn test_perfect_match_clamped_to_100() {
        // 50 + 20 + 15 + 15 + 10 = 110 before clamping
        let config = MatchConfig::default();
        let mut applicant = profile(Some(3.8), Some(1500), Some(34));
        applicant.intended_major = Some("Economics".to_string());
        let score = compute_match_score(
            &applicant,
            &college(Some(3.8), Some(1500), Some(34), &["Economics"]),
            &config,
        );
        assert_eq!(score, 100);
    }

    #[test]
    fn test_negative_total_clamped_to_zero() {
        let mut config = MatchConfig::default();
        config.weights.base = -40.0;
        let score = compute_match_score(
            &profile(None, None, None),
            &college(None, None, None, &[]),
            &config,
        );
        assert_eq!(score, 0);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let config = MatchConfig::default();
        let gpas = [None, Some(0.0), Some(2.0), Some(3.5), Some(4.0)];
        let sats = [None, Some(400), Some(1200), Some(1600)];
        let acts = [None, Some(1), Some(24), Some(36)];

        for gpa in gpas {
            for sat in sats {
                for act in acts {
                    let score = compute_match_score(
                        &profile(gpa, sat, act),
                        &college(Some(3.6), Some(1350), Some(29), &[]),
                        &config,
                    );
                    assert!(score <= 100, "score {score} out of range");
                }
            }
        }
    }
}
