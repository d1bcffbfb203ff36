//! Motivational message selection.
//!
//! A priority-ordered decision table over the insight summary. Check order is
//! significant: progress buckets first (highest wins), then achievements,
//! then stalled goals, then the default. Exactly one message comes back.

use crate::insights::dashboard::DashboardInsights;

/// Pick the single motivational message for a dashboard.
pub fn motivational_message(insights: &DashboardInsights) -> &'static str {
    let progress = insights.overall_progress;

    if progress >= 90 {
        "Incredible! You're in the home stretch. Finish strong!"
    } else if progress >= 70 {
        "Fantastic momentum! Your goals are well within reach."
    } else if progress >= 50 {
        "Halfway there! Your consistency is paying off."
    } else if progress >= 25 {
        "Good progress! Keep building on this momentum."
    } else if !insights.achievements.is_empty() {
        "Congratulations on completing a goal! Which one is next?"
    } else if !insights.stalled_goals.is_empty() {
        "Some goals are waiting for you. A small step today restarts the streak."
    } else {
        "Every step counts. Your goals are ready when you are!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insights(overall: u8) -> DashboardInsights {
        DashboardInsights {
            overall_progress: overall,
            weekly_progress: overall,
            stalled_goals: vec![],
            upcoming_deadlines: vec![],
            achievements: vec![],
            focus_areas: vec![],
            recent_coaching_feedback: vec![],
            goals_with_coach_notes: vec![],
        }
    }

    #[test]
    fn test_progress_buckets() {
        assert!(motivational_message(&insights(90)).contains("home stretch"));
        assert!(motivational_message(&insights(100)).contains("home stretch"));
        assert!(motivational_message(&insights(89)).contains("momentum"));
        assert!(motivational_message(&insights(70)).contains("momentum"));
        assert!(motivational_message(&insights(69)).contains("Halfway"));
        assert!(motivational_message(&insights(50)).contains("Halfway"));
        assert!(motivational_message(&insights(49)).contains("Good progress"));
        assert!(motivational_message(&insights(25)).contains("Good progress"));
    }

    #[test]
    fn test_achievements_beat_stalled_below_buckets() {
        use crate::insights::dashboard::{Achievement, StalledGoal};

        let mut i = insights(10);
        i.achievements.push(Achievement {
            goal_id: "g".to_string(),
            title: "Done".to_string(),
            category: "Health".to_string(),
        });
        i.stalled_goals.push(StalledGoal {
            goal_id: "s".to_string(),
            title: "Idle".to_string(),
            days_without_progress: 12,
        });
        assert!(motivational_message(&i).contains("Congratulations"));
    }

    #[test]
    fn test_stalled_message_when_no_achievements() {
        use crate::insights::dashboard::StalledGoal;

        let mut i = insights(0);
        i.stalled_goals.push(StalledGoal {
            goal_id: "s".to_string(),
            title: "Idle".to_string(),
            days_without_progress: 12,
        });
        assert!(motivational_message(&i).contains("small step"));
    }

    #[test]
    fn test_default_message() {
        assert!(motivational_message(&insights(0)).contains("Every step counts"));
    }

    #[test]
    fn test_buckets_win_over_achievements() {
        use crate::insights::dashboard::Achievement;

        let mut i = insights(55);
        i.achievements.push(Achievement {
            goal_id: "g".to_string(),
            title: "Done".to_string(),
            category: "Health".to_string(),
        });
        assert!(motivational_message(&i).contains("Halfway"));
    }
}
