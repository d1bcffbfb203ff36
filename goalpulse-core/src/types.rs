//! Core domain types for goalpulse
//!
//! These types are the canonical data model the engine consumes. Records are
//! handed over by the surrounding application after it has fetched them from
//! the document store; the engine never reads or writes storage itself.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Goal** | A single SMART objective owned by a member |
//! | **MeasurableSpec** | The typed rule translating current/target values into a percentage |
//! | **CoachingNote** | A feedback item a coach attached to exactly one Goal |
//! | **Category** | Free-text label grouping goals; absent labels fall into "Uncategorized" |
//! | **Status** | Derived lifecycle state (not-started, in-progress, completed, overdue) |
//!
//! Derived records ([`crate::progress::GoalProgress`] and friends) live in the
//! modules that compute them; this module only holds what the store provides.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Bucket label for goals without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

// ============================================
// Measurable spec
// ============================================

/// How a goal's completion is measured.
///
/// The store represents this as a loosely-typed record discriminated by a
/// `kind` string; here each kind carries exactly the fields that are valid for
/// it, so invalid tag/value combinations cannot be constructed. Records with a
/// kind we do not recognize deserialize to [`MeasurableSpec::Unknown`] and
/// compute as 0% rather than failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeasurableSpec {
    /// Progress toward a numeric target (e.g., 40 of 120 pages).
    Numeric {
        /// Current value; absent means no progress recorded yet
        #[serde(default)]
        current: Option<f64>,
        /// Target value; absent degrades to 1 so the ratio stays defined
        #[serde(default)]
        target: Option<f64>,
        /// Display unit ("pages", "km"); presentational only
        #[serde(default)]
        unit: Option<String>,
    },
    /// Consecutive-day streak toward a target streak length.
    DailyStreak {
        #[serde(default)]
        current: Option<f64>,
        #[serde(default)]
        target: Option<f64>,
    },
    /// Done or not done.
    Boolean {
        #[serde(default)]
        done: bool,
    },
    /// Reached once the target date arrives.
    Date {
        #[serde(default)]
        target: Option<NaiveDate>,
    },
    /// Unrecognized kind; always computes as 0%
    #[serde(other)]
    Unknown,
}

impl MeasurableSpec {
    /// Display unit, if this kind carries one.
    pub fn unit(&self) -> Option<&str> {
        match self {
            MeasurableSpec::Numeric { unit, .. } => unit.as_deref(),
            _ => None,
        }
    }
}

// ============================================
// Goal
// ============================================

/// A single SMART objective.
///
/// Created and mutated by the owning member through the surrounding
/// application; the engine only ever reads goals. Deletion happens in the
/// store and simply removes the record from the next snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Opaque identifier, stable for the goal's lifetime
    pub id: String,
    /// Short human-readable title
    pub title: String,
    /// How completion is measured
    pub measurable: MeasurableSpec,
    /// Explicit completion override; true forces 100% regardless of `measurable`
    #[serde(default)]
    pub completed: bool,
    /// Calendar due date (no time component)
    pub due_date: NaiveDate,
    /// Free-text category; absent or blank maps to [`UNCATEGORIZED`]
    #[serde(default)]
    pub category: Option<String>,
    /// Last manual progress update; absent means "no signal", not "abandoned"
    #[serde(default)]
    pub last_progress_update_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// Category label with the absent/blank case normalized.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => UNCATEGORIZED,
        }
    }
}

// ============================================
// Coaching notes
// ============================================

/// Kind of feedback a coach can leave on a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    Feedback,
    Encouragement,
    Suggestion,
    Milestone,
}

impl NoteType {
    /// Identifier used in stored records.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Feedback => "feedback",
            NoteType::Encouragement => "encouragement",
            NoteType::Suggestion => "suggestion",
            NoteType::Milestone => "milestone",
        }
    }

    /// Display name for UI surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            NoteType::Feedback => "Feedback",
            NoteType::Encouragement => "Encouragement",
            NoteType::Suggestion => "Suggestion",
            NoteType::Milestone => "Milestone",
        }
    }
}

impl std::fmt::Display for NoteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feedback" => Ok(NoteType::Feedback),
            "encouragement" => Ok(NoteType::Encouragement),
            "suggestion" => Ok(NoteType::Suggestion),
            "milestone" => Ok(NoteType::Milestone),
            _ => Err(format!("unknown note type: {}", s)),
        }
    }
}

/// Feedback item attached to exactly one goal.
///
/// Owned by the coach who wrote it but logically belongs to the goal it
/// annotates. Only `is_read` is mutable, and only by the viewing member;
/// the engine reads notes and never creates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingNote {
    pub id: String,
    /// Goal this note annotates (many notes per goal)
    pub goal_id: String,
    pub coach_id: String,
    pub coach_name: String,
    /// Free-text body
    pub note: String,
    pub note_type: NoteType,
    pub created_at: DateTime<Utc>,
    /// Whether the viewing member has read this note
    #[serde(default)]
    pub is_read: bool,
}

// ============================================
// Goal status
// ============================================

/// Derived lifecycle status of a goal.
///
/// Never stored; recomputed from the goal record on every evaluation.
/// Completion dominates: a goal finished after its due date is `Completed`,
/// not `Overdue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
    Overdue,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not-started",
            GoalStatus::InProgress => "in-progress",
            GoalStatus::Completed => "completed",
            GoalStatus::Overdue => "overdue",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, GoalStatus::Completed)
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(GoalStatus::NotStarted),
            "in-progress" => Ok(GoalStatus::InProgress),
            "completed" => Ok(GoalStatus::Completed),
            "overdue" => Ok(GoalStatus::Overdue),
            _ => Err(format!("unknown goal status: {}", s)),
        }
    }
}
