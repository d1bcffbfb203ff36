//! Snapshot ingestion at the store boundary.
//!
//! The surrounding application listens to the document store and hands the
//! engine a full snapshot of goals and notes on every change. This module
//! decodes that snapshot from JSON. Decoding is lenient where the data model
//! allows it (optional fields default, unknown measurable kinds are accepted);
//! a structurally broken document is the one case that returns an error.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::insights::Dashboard;
use crate::types::{CoachingNote, Goal};

/// A full snapshot of one member's goals and coaching notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub notes: Vec<CoachingNote>,
}

impl Snapshot {
    /// Decode a snapshot from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(s)?;
        tracing::debug!(
            goals = snapshot.goals.len(),
            notes = snapshot.notes.len(),
            "decoded snapshot"
        );
        Ok(snapshot)
    }

    /// Decode a snapshot from a reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Compute the full dashboard for this snapshot.
    pub fn dashboard(&self, config: &EngineConfig, now: chrono::DateTime<chrono::Utc>) -> Dashboard {
        Dashboard::build(&self.goals, &self.notes, config, now)
    }
}
