//! Per-goal progress calculation and status classification.
//!
//! Two small pure functions and the derived record they produce:
//!
//! - [`calculate_progress`] turns a [`MeasurableSpec`] plus the completion
//!   override into an integer percentage in `[0, 100]`.
//! - [`classify_status`] derives the lifecycle [`GoalStatus`] from that
//!   percentage, the completion flag, and the due date.
//!
//! Both are total: malformed or missing values degrade to 0% rather than
//! erroring, so one corrupt record can never take down a dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::types::{CoachingNote, Goal, GoalStatus, MeasurableSpec};

/// Convert a measurable spec and completion override into a percentage.
///
/// `completed == true` short-circuits to 100 without inspecting the spec.
/// Numeric and streak kinds use `round(clamp(current/target, 0, 1) * 100)`
/// with a missing current treated as 0 and a missing target treated as 1;
/// a resolved target at or below zero yields 0. Date goals are binary on
/// elapse: 100 once the target date arrives, 0 before that (the records
/// carry no creation date, so an elapsed-time ratio is not computable).
pub fn calculate_progress(measurable: &MeasurableSpec, completed: bool, today: NaiveDate) -> u8 {
    if completed {
        return 100;
    }

    match measurable {
        MeasurableSpec::Numeric { current, target, .. }
        | MeasurableSpec::DailyStreak { current, target } => {
            ratio_percent(current.unwrap_or(0.0), target.unwrap_or(1.0))
        }
        MeasurableSpec::Boolean { done } => {
            if *done {
                100
            } else {
                0
            }
        }
        MeasurableSpec::Date { target } => match target {
            Some(target) if *target <= today => 100,
            _ => 0,
        },
        MeasurableSpec::Unknown => {
            tracing::debug!("unknown measurable kind, computing as 0%");
            0
        }
    }
}

/// Clamped percentage of `current / target`, guarding non-finite and
/// non-positive targets.
fn ratio_percent(current: f64, target: f64) -> u8 {
    if !target.is_finite() || target <= 0.0 {
        return 0;
    }
    let current = if current.is_finite() { current } else { 0.0 };
    let ratio = (current / target).clamp(0.0, 1.0);
    (ratio * 100.0).round() as u8
}

/// Derive the lifecycle status for a goal.
///
/// Rule order is significant: completion wins over overdue, so a goal
/// finished after its nominal due date reports `Completed`.
pub fn classify_status(goal: &Goal, percentage: u8, today: NaiveDate) -> GoalStatus {
    if goal.completed || percentage >= 100 {
        GoalStatus::Completed
    } else if goal.due_date < today {
        GoalStatus::Overdue
    } else if percentage > 0 {
        GoalStatus::InProgress
    } else {
        GoalStatus::NotStarted
    }
}

/// Whole days since the last manual progress update.
///
/// An absent timestamp means "no signal" and counts as 0 days, not as
/// abandonment. A timestamp in the future clamps to 0.
pub fn days_without_progress(goal: &Goal, now: DateTime<Utc>) -> i64 {
    match goal.last_progress_update_at {
        Some(ts) => (now - ts).num_days().max(0),
        None => 0,
    }
}

/// Derived progress record for one goal.
///
/// Computed fresh on every evaluation; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub goal_id: String,
    pub title: String,
    /// Normalized category label (absent maps to "Uncategorized")
    pub category: String,
    /// Integer percentage in [0, 100]
    pub percentage: u8,
    pub status: GoalStatus,
    pub due_date: NaiveDate,
    /// Whole days since the last manual progress update (0 if unknown)
    pub days_without_progress: i64,
    pub has_unread_coach_notes: bool,
    /// Notes attached to this goal, in snapshot order
    pub coaching_notes: Vec<CoachingNote>,
}

impl GoalProgress {
    /// Compute the progress record for `goal`.
    ///
    /// `notes` must be the subset of coaching notes attached to this goal;
    /// the aggregator pre-groups them by goal id.
    pub fn compute(goal: &Goal, notes: Vec<CoachingNote>, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let percentage = calculate_progress(&goal.measurable, goal.completed, today);
        let status = classify_status(goal, percentage, today);
        let has_unread_coach_notes = notes.iter().any(|n| !n.is_read);

        Self {
            goal_id: goal.id.clone(),
            title: goal.title.clone(),
            category: goal.category_label().to_string(),
            percentage,
            status,
            due_date: goal.due_date,
            days_without_progress: days_without_progress(goal, now),
            has_unread_coach_notes,
            coaching_notes: notes,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Whether this goal counts as stalled for the given threshold.
    ///
    /// Strictly greater than: at the default threshold of 7, a goal idle for
    /// exactly 7 days is not yet stalled, 8 days is.
    pub fn is_stalled(&self, stalled_after_days: i64) -> bool {
        !self.is_completed() && self.days_without_progress > stalled_after_days
    }

    /// Whether any coach has left a note on this goal.
    pub fn has_coach_notes(&self) -> bool {
        !self.coaching_notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    fn numeric(current: Option<f64>, target: Option<f64>) -> MeasurableSpec {
        MeasurableSpec::Numeric { current, target, unit: None }
    }

    fn goal(measurable: MeasurableSpec, completed: bool, due_date: NaiveDate) -> Goal {
        Goal {
            id: "g-1".to_string(),
            title: "Test goal".to_string(),
            measurable,
            completed,
            due_date,
            category: None,
            last_progress_update_at: None,
        }
    }

    #[test]
    fn test_numeric_progress() {
        assert_eq!(calculate_progress(&numeric(Some(50.0), Some(100.0)), false, today()), 50);
        assert_eq!(calculate_progress(&numeric(Some(25.0), Some(100.0)), false, today()), 25);
        // Over-achievement clamps to 100
        assert_eq!(calculate_progress(&numeric(Some(150.0), Some(100.0)), false, today()), 100);
        // Rounding, not truncation
        assert_eq!(calculate_progress(&numeric(Some(1.0), Some(3.0)), false, today()), 33);
        assert_eq!(calculate_progress(&numeric(Some(2.0), Some(3.0)), false, today()), 67);
    }

    #[test]
    fn test_numeric_degenerate_inputs() {
        // Division guard
        assert_eq!(calculate_progress(&numeric(Some(10.0), Some(0.0)), false, today()), 0);
        assert_eq!(calculate_progress(&numeric(Some(10.0), Some(-5.0)), false, today()), 0);
        // Missing current counts as 0, missing target as 1
        assert_eq!(calculate_progress(&numeric(None, Some(100.0)), false, today()), 0);
        assert_eq!(calculate_progress(&numeric(Some(3.0), None), false, today()), 100);
        assert_eq!(calculate_progress(&numeric(None, None), false, today()), 0);
        // Negative progress clamps to 0
        assert_eq!(calculate_progress(&numeric(Some(-4.0), Some(10.0)), false, today()), 0);
        // Non-finite values never panic
        assert_eq!(calculate_progress(&numeric(Some(f64::NAN), Some(10.0)), false, today()), 0);
        assert_eq!(calculate_progress(&numeric(Some(5.0), Some(f64::INFINITY)), false, today()), 0);
    }

    #[test]
    fn test_completed_short_circuits() {
        // The override wins even over a division guard case
        assert_eq!(calculate_progress(&numeric(Some(0.0), Some(0.0)), true, today()), 100);
        assert_eq!(calculate_progress(&MeasurableSpec::Unknown, true, today()), 100);
    }

    #[test]
    fn test_boolean_progress() {
        assert_eq!(calculate_progress(&MeasurableSpec::Boolean { done: true }, false, today()), 100);
        assert_eq!(calculate_progress(&MeasurableSpec::Boolean { done: false }, false, today()), 0);
    }

    #[test]
    fn test_date_progress_binary_on_elapse() {
        let spec = |d: NaiveDate| MeasurableSpec::Date { target: Some(d) };
        assert_eq!(calculate_progress(&spec(today() - Duration::days(1)), false, today()), 100);
        assert_eq!(calculate_progress(&spec(today()), false, today()), 100);
        assert_eq!(calculate_progress(&spec(today() + Duration::days(1)), false, today()), 0);
        assert_eq!(calculate_progress(&MeasurableSpec::Date { target: None }, false, today()), 0);
    }

    #[test]
    fn test_unknown_kind_is_zero() {
        assert_eq!(calculate_progress(&MeasurableSpec::Unknown, false, today()), 0);
    }

    #[test]
    fn test_status_rules_in_order() {
        let future = today() + Duration::days(30);
        let past = today() - Duration::days(1);

        let g = goal(numeric(Some(0.0), Some(10.0)), false, future);
        assert_eq!(classify_status(&g, 0, today()), GoalStatus::NotStarted);
        assert_eq!(classify_status(&g, 1, today()), GoalStatus::InProgress);
        assert_eq!(classify_status(&g, 100, today()), GoalStatus::Completed);

        let overdue = goal(numeric(Some(0.0), Some(10.0)), false, past);
        assert_eq!(classify_status(&overdue, 0, today()), GoalStatus::Overdue);
        assert_eq!(classify_status(&overdue, 50, today()), GoalStatus::Overdue);
    }

    #[test]
    fn test_completion_dominates_overdue() {
        let past = today() - Duration::days(90);
        let g = goal(numeric(Some(2.0), Some(10.0)), true, past);
        assert_eq!(classify_status(&g, 100, today()), GoalStatus::Completed);

        // 100% by measurement alone also wins over the date comparison
        let g = goal(numeric(Some(10.0), Some(10.0)), false, past);
        assert_eq!(classify_status(&g, 100, today()), GoalStatus::Completed);
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let g = goal(numeric(Some(0.0), Some(10.0)), false, today());
        assert_eq!(classify_status(&g, 0, today()), GoalStatus::NotStarted);
    }

    #[test]
    fn test_days_without_progress() {
        let mut g = goal(numeric(Some(1.0), Some(10.0)), false, today());
        assert_eq!(days_without_progress(&g, now()), 0);

        g.last_progress_update_at = Some(now() - Duration::days(8));
        assert_eq!(days_without_progress(&g, now()), 8);

        // Partial days floor down
        g.last_progress_update_at = Some(now() - Duration::hours(30));
        assert_eq!(days_without_progress(&g, now()), 1);

        // Future timestamps clamp to 0
        g.last_progress_update_at = Some(now() + Duration::days(2));
        assert_eq!(days_without_progress(&g, now()), 0);
    }

    #[test]
    fn test_stalled_boundary() {
        let mut g = goal(numeric(Some(1.0), Some(10.0)), false, today() + Duration::days(30));

        g.last_progress_update_at = Some(now() - Duration::days(7));
        let gp = GoalProgress::compute(&g, vec![], now());
        assert!(!gp.is_stalled(7));

        g.last_progress_update_at = Some(now() - Duration::days(8));
        let gp = GoalProgress::compute(&g, vec![], now());
        assert!(gp.is_stalled(7));
    }

    #[test]
    fn test_completed_goal_never_stalled() {
        let mut g = goal(numeric(Some(1.0), Some(10.0)), true, today());
        g.last_progress_update_at = Some(now() - Duration::days(60));
        let gp = GoalProgress::compute(&g, vec![], now());
        assert!(!gp.is_stalled(7));
    }

    #[test]
    fn test_compute_attaches_notes() {
        use crate::types::NoteType;

        let g = goal(numeric(Some(5.0), Some(10.0)), false, today() + Duration::days(10));
        let note = CoachingNote {
            id: "n-1".to_string(),
            goal_id: "g-1".to_string(),
            coach_id: "c-1".to_string(),
            coach_name: "Dana".to_string(),
            note: "Nice pace this week".to_string(),
            note_type: NoteType::Encouragement,
            created_at: now() - Duration::days(1),
            is_read: false,
        };

        let gp = GoalProgress::compute(&g, vec![note], now());
        assert_eq!(gp.percentage, 50);
        assert_eq!(gp.status, GoalStatus::InProgress);
        assert!(gp.has_unread_coach_notes);
        assert!(gp.has_coach_notes());
        assert_eq!(gp.category, crate::types::UNCATEGORIZED);
    }
}
