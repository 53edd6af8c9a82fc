use crate::matching::config::MatchConfig;
use crate::matching::metrics::Metric;
use crate::models::college::College;
use crate::models::profile::Profile;
use crate::models::recommendation::Category;

const REACH_NOTE: &str = "Focus on strong essays and recommendations to stand out";
const SAFETY_NOTE: &str = "Strong candidate - consider merit scholarships";

/// Builds the gap-analysis text shown next to a recommendation.
/// Order is fixed: GPA note, SAT note, category note.
pub fn build_gap_notes(
    profile: &Profile,
    college: &College,
    category: Category,
    config: &MatchConfig,
) -> String {
    let mut notes = Vec::new();

    if let Some((applicant, average)) = Metric::Gpa.pair(profile, college) {
        let diff = applicant - average;
        if diff.abs() > config.notes.gpa {
            notes.push(format!(
                "Your GPA is {} the average by {:.2} points",
                direction(diff),
                diff.abs()
            ));
        }
    }

    if let Some((applicant, average)) = Metric::Sat.pair(profile, college) {
        let diff = applicant - average;
        if diff.abs() > config.notes.sat {
            notes.push(format!(
                "Your SAT is {} average by {:.0} points",
                direction(diff),
                diff.abs()
            ));
        }
    }

    match category {
        Category::Reach => notes.push(REACH_NOTE.to_string()),
        Category::Safety => notes.push(SAFETY_NOTE.to_string()),
        Category::Target => {}
    }

    notes.join(". ")
}

fn direction(diff: f64) -> &'static str {
    if diff > 0.0 {
        "above"
    } else {
        "below"
    }
}
