//! Category and overall roll-ups of per-goal progress.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::progress::GoalProgress;
use crate::types::{CoachingNote, Goal};

/// Aggregate over all goals sharing a category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProgress {
    pub category: String,
    pub total_goals: usize,
    /// Count of member goals whose derived status is completed
    pub completed_goals: usize,
    /// Rounded mean of member percentages; distinct from the completion-count
    /// ratio (goals at 10% and 90% average 50% with zero completions)
    pub average_progress: u8,
    /// Member progress records in snapshot order
    pub goals: Vec<GoalProgress>,
    /// True if any member goal has at least one coaching note
    pub has_coaching_attention: bool,
}

/// Top-level roll-up across every goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverallProgress {
    /// Goals whose derived status is completed
    pub completed: usize,
    /// Total goal count
    pub total: usize,
    /// `round(completed / total * 100)`; 0 when there are no goals
    pub percentage: u8,
    /// Rounded mean of all per-goal percentages; 0 when there are no goals
    pub average_progress: u8,
}

/// Rounded mean of a percentage list; 0 for an empty list.
fn round_mean(percentages: impl Iterator<Item = u8>) -> u8 {
    let (sum, count) = percentages.fold((0u32, 0u32), |(s, c), p| (s + p as u32, c + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u8
}

/// Group goals by category and roll up progress.
///
/// Categories appear in first-seen order. Goals with an absent or blank
/// category land in the "Uncategorized" bucket. Notes are matched to goals by
/// `goal_id`; notes referencing unknown goals are ignored.
///
/// Stateless and deterministic: identical inputs always produce identical
/// output, and an empty goal list yields an empty category list plus an
/// all-zero [`OverallProgress`].
pub fn aggregate(
    goals: &[Goal],
    notes: &[CoachingNote],
    now: DateTime<Utc>,
) -> (Vec<CategoryProgress>, OverallProgress) {
    // Pre-group notes so each goal gets its subset in one pass
    let mut notes_by_goal: HashMap<&str, Vec<CoachingNote>> = HashMap::new();
    for note in notes {
        notes_by_goal
            .entry(note.goal_id.as_str())
            .or_default()
            .push(note.clone());
    }

    let mut categories: Vec<CategoryProgress> = Vec::new();
    let mut index_by_category: HashMap<String, usize> = HashMap::new();

    let mut completed_total = 0usize;

    for goal in goals {
        let own_notes = notes_by_goal.remove(goal.id.as_str()).unwrap_or_default();
        let progress = GoalProgress::compute(goal, own_notes, now);

        if progress.is_completed() {
            completed_total += 1;
        }

        let label = progress.category.clone();
        let idx = *index_by_category.entry(label.clone()).or_insert_with(|| {
            categories.push(CategoryProgress {
                category: label,
                total_goals: 0,
                completed_goals: 0,
                average_progress: 0,
                goals: Vec::new(),
                has_coaching_attention: false,
            });
            categories.len() - 1
        });

        let bucket = &mut categories[idx];
        bucket.total_goals += 1;
        if progress.is_completed() {
            bucket.completed_goals += 1;
        }
        bucket.has_coaching_attention |= progress.has_coach_notes();
        bucket.goals.push(progress);
    }

    for bucket in &mut categories {
        bucket.average_progress = round_mean(bucket.goals.iter().map(|g| g.percentage));
    }

    let total = goals.len();
    let overall = OverallProgress {
        completed: completed_total,
        total,
        percentage: if total == 0 {
            0
        } else {
            (completed_total as f64 / total as f64 * 100.0).round() as u8
        },
        average_progress: round_mean(
            categories.iter().flat_map(|c| c.goals.iter().map(|g| g.percentage)),
        ),
    };

    tracing::debug!(
        goals = total,
        categories = categories.len(),
        completed = overall.completed,
        average = overall.average_progress,
        "aggregated goal progress"
    );

    (categories, overall)
}
