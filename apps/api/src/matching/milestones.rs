use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::milestone::{Milestone, NewMilestone};

struct MilestoneTemplate {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    days_out: i64,
}

const INITIAL_MILESTONES: [MilestoneTemplate; 4] = [
    MilestoneTemplate {
        title: "Complete SAT/ACT Prep",
        description: "Prepare and take standardized tests",
        category: "Testing",
        days_out: 90,
    },
    MilestoneTemplate {
        title: "Draft College Essays",
        description: "Write and refine your personal statement",
        category: "Essays",
        days_out: 120,
    },
    MilestoneTemplate {
        title: "Submit Applications",
        description: "Complete and submit college applications",
        category: "Applications",
        days_out: 150,
    },
    MilestoneTemplate {
        title: "Request Recommendation Letters",
        description: "Ask teachers for letters of recommendation",
        category: "Recommendations",
        days_out: 60,
    },
];

/// The starter checklist for a profile, with deadlines relative to `now`.
pub fn initial_milestones(profile_id: Uuid, now: DateTime<Utc>) -> Vec<NewMilestone> {
    INITIAL_MILESTONES
        .iter()
        .map(|t| NewMilestone {
            user_id: profile_id,
            title: t.title.to_string(),
            description: t.description.to_string(),
            category: t.category.to_string(),
            deadline: now + Duration::days(t.days_out),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MilestoneProgress {
    pub completed: usize,
    pub total: usize,
    pub progress_percent: u8,
}

pub fn summarize_progress(milestones: &[Milestone]) -> MilestoneProgress {
    let total = milestones.len();
    let completed = milestones.iter().filter(|m| m.completed).count();
    let progress_percent = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    MilestoneProgress {
        completed,
        total,
        progress_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
    }

    fn milestone(completed: bool) -> Milestone {
        Milestone {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Draft College Essays".to_string(),
            description: None,
            category: "Essays".to_string(),
            deadline: fixed_now(),
            completed,
            completed_at: None,
        }
    }

    #[test]
    fn test_four_milestones_with_fixed_offsets() {
        let profile_id = Uuid::new_v4();
        let now = fixed_now();
        let seeded = initial_milestones(profile_id, now);

        assert_eq!(seeded.len(), 4);
        assert!(seeded.iter().all(|m| m.user_id == profile_id));

        let offsets: Vec<(String, i64)> = seeded
            .iter()
            .map(|m| (m.category.clone(), (m.deadline - now).num_days()))
            .collect();
        assert_eq!(
            offsets,
            vec![
                ("Testing".to_string(), 90),
                ("Essays".to_string(), 120),
                ("Applications".to_string(), 150),
                ("Recommendations".to_string(), 60),
            ]
        );
    }

    #[test]
    fn test_progress_empty_is_zero() {
        let progress = summarize_progress(&[]);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.progress_percent, 0);
    }

    #[test]
    fn test_progress_rounds_percentage() {
        let milestones = vec![milestone(true), milestone(false), milestone(false)];
        let progress = summarize_progress(&milestones);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.progress_percent, 33);
    }
}
