use crate::matching::config::MatchConfig;
use crate::matching::metrics::Metric;
use crate::models::college::College;
use crate::models::profile::Profile;
use crate::models::recommendation::Category;

/// Classifies a college as reach / target / safety for this applicant.
///
/// Each comparable metric counts as "above" when the applicant beats the college
/// average by at least its margin. The safety test uses the ratio taken to two
/// decimals, so 2 of 3 (0.67) is a safety. The reach test uses the raw ratio,
/// so 1 of 3 (0.333) stays a target. With nothing to compare the answer is `Target`.
pub fn categorize(profile: &Profile, college: &College, config: &MatchConfig) -> Category {
    let margins = &config.margins;
    let mut compared = 0u32;
    let mut above = 0u32;

    for metric in Metric::ALL {
        if let Some((applicant, average)) = metric.pair(profile, college) {
            compared += 1;
            if applicant >= average + margins.for_metric(metric) {
                above += 1;
            }
        }
    }

    if compared == 0 {
        return Category::Target;
    }

    let ratio = f64::from(above) / f64::from(compared);
    let rounded = (ratio * 100.0).round() / 100.0;

    if rounded >= margins.safety_ratio {
        Category::Safety
    } else if ratio <= margins.reach_ratio {
        Category::Reach
    } else {
        Category::Target
    }
}
