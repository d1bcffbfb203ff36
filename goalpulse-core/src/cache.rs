//! Caller-owned TTL cache for computed dashboards.
//!
//! The engine itself never caches: every call recomputes from scratch. A
//! consumer that renders the same snapshot repeatedly can hold one of these
//! instead of relying on module-level mutable state. The cache is an explicit
//! value the caller owns, with an explicit TTL and an explicit `now`, so it
//! stays as testable as the rest of the engine.

use chrono::{DateTime, Duration, Utc};

use crate::insights::Dashboard;

struct CacheEntry {
    computed_at: DateTime<Utc>,
    dashboard: Dashboard,
}

/// A single-slot dashboard cache with a fixed TTL.
pub struct DashboardCache {
    ttl: Duration,
    entry: Option<CacheEntry>,
}

impl DashboardCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// The cached dashboard, if one exists and is still fresh at `now`.
    pub fn get(&self, now: DateTime<Utc>) -> Option<&Dashboard> {
        self.entry
            .as_ref()
            .filter(|e| now - e.computed_at < self.ttl)
            .map(|e| &e.dashboard)
    }

    /// Return the fresh cached dashboard or compute and store a new one.
    pub fn get_or_compute<F>(&mut self, now: DateTime<Utc>, compute: F) -> &Dashboard
    where
        F: FnOnce() -> Dashboard,
    {
        let stale = self
            .entry
            .as_ref()
            .map_or(true, |e| now - e.computed_at >= self.ttl);

        if stale {
            tracing::debug!("dashboard cache miss, recomputing");
            self.entry = Some(CacheEntry {
                computed_at: now,
                dashboard: compute(),
            });
        }

        // Entry is always Some after the refresh above
        &self.entry.as_ref().unwrap().dashboard
    }

    /// Drop the cached value; the next access recomputes.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
