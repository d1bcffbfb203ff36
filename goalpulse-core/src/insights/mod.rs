//! Insights module for goalpulse
//!
//! Rolls per-goal progress up into dashboard-ready summaries:
//! - Category and overall aggregation
//! - Dashboard insights (stalled goals, deadlines, achievements, focus areas)
//! - Motivational message selection
//!
//! Everything here is a pure function of the goal and note snapshots plus an
//! explicit `now`; there is no internal state or caching. Callers that want
//! caching wrap the result in a [`crate::cache::DashboardCache`].
//!
//! Data flows one direction:
//!
//! ```text
//! goals + notes
//!     -> GoalProgress (per goal)
//!     -> CategoryProgress + OverallProgress   [aggregate]
//!     -> DashboardInsights                    [dashboard]
//!     -> motivational message                 [motivation]
//! ```

pub mod aggregate;
pub mod dashboard;
pub mod motivation;

pub use aggregate::{aggregate, CategoryProgress, OverallProgress};
pub use dashboard::{
    generate_insights, Achievement, Dashboard, DashboardInsights, FocusArea, StalledGoal,
    UpcomingDeadline,
};
pub use motivation::motivational_message;
