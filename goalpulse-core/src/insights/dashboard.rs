//! Dashboard insight generation.
//!
//! Scans aggregated progress plus coaching notes and produces the typed
//! insight lists the dashboard renders: stalled goals, upcoming deadlines,
//! achievements, focus areas, and recent coaching feedback.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::insights::aggregate::{aggregate, CategoryProgress, OverallProgress};
use crate::insights::motivation::motivational_message;
use crate::types::{CoachingNote, Goal};

/// An incomplete goal that has gone too long without a progress update.
#[derive(Debug, Clone, Serialize)]
pub struct StalledGoal {
    pub goal_id: String,
    pub title: String,
    pub days_without_progress: i64,
}

/// An incomplete goal whose due date falls inside the deadline window.
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingDeadline {
    pub goal_id: String,
    pub title: String,
    pub due_date: NaiveDate,
    /// Days from today to the due date (0 = due today)
    pub days_remaining: i64,
}

/// A completed goal surfaced as an achievement.
///
/// Regenerated on every run and not deduplicated; idempotent achievement
/// tracking would need persistence the engine deliberately does not have.
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub goal_id: String,
    pub title: String,
    pub category: String,
}

/// A category whose average progress sits below the configured cutoff.
#[derive(Debug, Clone, Serialize)]
pub struct FocusArea {
    pub category: String,
    pub average_progress: u8,
}

/// Top-level insight summary for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardInsights {
    /// Rounded mean of all per-goal percentages
    pub overall_progress: u8,
    /// Placeholder that mirrors `overall_progress` until week-over-week
    /// tracking exists; true deltas need persisted historical snapshots
    pub weekly_progress: u8,
    /// Stalled goals, longest-idle first
    pub stalled_goals: Vec<StalledGoal>,
    /// Deadlines inside the window, soonest first
    pub upcoming_deadlines: Vec<UpcomingDeadline>,
    /// One entry per completed goal
    pub achievements: Vec<Achievement>,
    /// Worst categories below the cutoff, ascending, capped at the limit
    pub focus_areas: Vec<FocusArea>,
    /// Notes created inside the recent-feedback window
    pub recent_coaching_feedback: Vec<CoachingNote>,
    /// Ids of goals that have at least one coaching note
    pub goals_with_coach_notes: Vec<String>,
}

/// Generate dashboard insights from raw goal and note snapshots.
///
/// Convenience wrapper that aggregates first; [`Dashboard::build`] reuses a
/// single aggregation pass when the caller wants both.
pub fn generate_insights(
    goals: &[Goal],
    notes: &[CoachingNote],
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> DashboardInsights {
    let (categories, overall) = aggregate(goals, notes, now);
    build_insights(&categories, &overall, notes, config, now)
}

fn build_insights(
    categories: &[CategoryProgress],
    overall: &OverallProgress,
    notes: &[CoachingNote],
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> DashboardInsights {
    let today = now.date_naive();

    let mut stalled_goals = Vec::new();
    let mut upcoming_deadlines = Vec::new();
    let mut achievements = Vec::new();
    let mut goals_with_coach_notes = Vec::new();

    for progress in categories.iter().flat_map(|c| c.goals.iter()) {
        if progress.is_stalled(config.stalled_after_days) {
            stalled_goals.push(StalledGoal {
                goal_id: progress.goal_id.clone(),
                title: progress.title.clone(),
                days_without_progress: progress.days_without_progress,
            });
        }

        if !progress.is_completed() {
            let days_remaining = (progress.due_date - today).num_days();
            // Both ends inclusive: due today and due on the window's last day both count
            if (0..=config.deadline_window_days).contains(&days_remaining) {
                upcoming_deadlines.push(UpcomingDeadline {
                    goal_id: progress.goal_id.clone(),
                    title: progress.title.clone(),
                    due_date: progress.due_date,
                    days_remaining,
                });
            }
        }

        if progress.is_completed() {
            achievements.push(Achievement {
                goal_id: progress.goal_id.clone(),
                title: progress.title.clone(),
                category: progress.category.clone(),
            });
        }

        if progress.has_coach_notes() {
            goals_with_coach_notes.push(progress.goal_id.clone());
        }
    }

    stalled_goals.sort_by(|a, b| b.days_without_progress.cmp(&a.days_without_progress));
    upcoming_deadlines.sort_by_key(|d| d.days_remaining);

    let mut focus_areas: Vec<FocusArea> = categories
        .iter()
        .filter(|c| c.average_progress < config.focus_area_cutoff)
        .map(|c| FocusArea {
            category: c.category.clone(),
            average_progress: c.average_progress,
        })
        .collect();
    // Worst first; sort is stable so ties keep first-seen category order
    focus_areas.sort_by_key(|f| f.average_progress);
    focus_areas.truncate(config.focus_area_limit);

    let feedback_cutoff = now - Duration::days(config.recent_feedback_days);
    let recent_coaching_feedback: Vec<CoachingNote> = notes
        .iter()
        .filter(|n| n.created_at >= feedback_cutoff)
        .cloned()
        .collect();

    DashboardInsights {
        overall_progress: overall.average_progress,
        weekly_progress: overall.average_progress,
        stalled_goals,
        upcoming_deadlines,
        achievements,
        focus_areas,
        recent_coaching_feedback,
        goals_with_coach_notes,
    }
}

/// Complete dashboard bundle: aggregates, insights, and the message.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub categories: Vec<CategoryProgress>,
    pub overall: OverallProgress,
    pub insights: DashboardInsights,
    pub message: String,
}

impl Dashboard {
    /// Compute the full dashboard in one aggregation pass.
    pub fn build(
        goals: &[Goal],
        notes: &[CoachingNote],
        config: &EngineConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let (categories, overall) = aggregate(goals, notes, now);
        let insights = build_insights(&categories, &overall, notes, config, now);
        let message = motivational_message(&insights).to_string();

        tracing::debug!(
            stalled = insights.stalled_goals.len(),
            deadlines = insights.upcoming_deadlines.len(),
            achievements = insights.achievements.len(),
            focus_areas = insights.focus_areas.len(),
            "built dashboard"
        );

        Self {
            categories,
            overall,
            insights,
            message,
        }
    }
}
