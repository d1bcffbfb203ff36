//! # goalpulse-core
//!
//! Core library for goalpulse - a SMART goal progress and insight engine.
//!
//! This library provides:
//! - Domain types for goals, measurable specs, and coaching notes
//! - Per-goal progress calculation and status classification
//! - Category and overall aggregation
//! - Dashboard insight generation with a motivational message
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! The engine is a pure, synchronous pipeline over in-memory snapshots:
//!
//! - **Inputs:** goal and coaching-note records, already fetched and decoded
//!   by the surrounding application
//! - **Derived:** per-goal progress, category/overall roll-ups, dashboard
//!   insights (all recomputed from scratch on every call, never persisted)
//!
//! There is no I/O, locking, or shared mutable state inside the engine, so
//! concurrent invocations are inherently safe. Anomalous records degrade to
//! documented defaults (0%, "Uncategorized", 0 idle days) instead of erroring;
//! a dashboard can under-report progress but never crash on partial data.
//!
//! ## Example
//!
//! ```rust
//! use goalpulse_core::{EngineConfig, Snapshot};
//!
//! let snapshot = Snapshot::from_json_str(r#"{"goals": [], "notes": []}"#)
//!     .expect("valid snapshot");
//! let dashboard = snapshot.dashboard(&EngineConfig::default(), chrono::Utc::now());
//! assert_eq!(dashboard.overall.total, 0);
//! ```

// Re-export commonly used items at the crate root
pub use cache::DashboardCache;
pub use config::{Config, EngineConfig};
pub use error::{Error, Result};
pub use insights::{aggregate, Dashboard, DashboardInsights, OverallProgress};
pub use progress::GoalProgress;
pub use snapshot::Snapshot;
pub use types::*;

// Public modules
pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod insights;
pub mod logging;
pub mod progress;
pub mod snapshot;
pub mod types;
