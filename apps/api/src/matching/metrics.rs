use crate::models::college::College;
use crate::models::profile::Profile;

/// The numeric admissions metrics shared by applicants and colleges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Gpa,
    Sat,
    Act,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Gpa, Metric::Sat, Metric::Act];

    /// Returns `(applicant, college_average)` when both sides carry a positive value.
    /// Zero is treated the same as missing.
    pub fn pair(self, profile: &Profile, college: &College) -> Option<(f64, f64)> {
        let (applicant, average) = match self {
            Metric::Gpa => (profile.gpa, college.avg_gpa),
            Metric::Sat => (
                profile.sat_score.map(f64::from),
                college.avg_sat.map(f64::from),
            ),
            Metric::Act => (
                profile.act_score.map(f64::from),
                college.avg_act.map(f64::from),
            ),
        };

        match (applicant, average) {
            (Some(a), Some(c)) if a > 0.0 && c > 0.0 => Some((a, c)),
            _ => None,
        }
    }
}
