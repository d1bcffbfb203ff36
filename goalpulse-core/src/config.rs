//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/goalpulse/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/goalpulse/` (~/.config/goalpulse/)
//! - State/Logs: `$XDG_STATE_HOME/goalpulse/` (~/.local/state/goalpulse/)
//!
//! Every engine threshold has a serde default, so an empty or absent config
//! file yields the documented behavior (stalled after 7 idle days, 7-day
//! deadline window, focus areas below 50%).

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Engine thresholds
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Thresholds used by the aggregator and insight generator.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Days without a progress update before an incomplete goal counts as
    /// stalled (strictly greater than; 7 idle days is not yet stalled)
    #[serde(default = "default_stalled_after_days")]
    pub stalled_after_days: i64,

    /// Width of the upcoming-deadline window in days, both ends inclusive
    #[serde(default = "default_deadline_window_days")]
    pub deadline_window_days: i64,

    /// Coaching notes newer than this many days count as recent feedback
    #[serde(default = "default_recent_feedback_days")]
    pub recent_feedback_days: i64,

    /// Categories averaging below this percentage become focus areas
    #[serde(default = "default_focus_area_cutoff")]
    pub focus_area_cutoff: u8,

    /// Maximum number of focus areas surfaced, worst first
    #[serde(default = "default_focus_area_limit")]
    pub focus_area_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stalled_after_days: default_stalled_after_days(),
            deadline_window_days: default_deadline_window_days(),
            recent_feedback_days: default_recent_feedback_days(),
            focus_area_cutoff: default_focus_area_cutoff(),
            focus_area_limit: default_focus_area_limit(),
        }
    }
}

fn default_stalled_after_days() -> i64 {
    7
}

fn default_deadline_window_days() -> i64 {
    7
}

fn default_recent_feedback_days() -> i64 {
    7
}

fn default_focus_area_cutoff() -> u8 {
    50
}

fn default_focus_area_limit() -> usize {
    3
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/goalpulse/config.toml` (~/.config/goalpulse/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("goalpulse").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/goalpulse/` (~/.local/state/goalpulse/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("goalpulse")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/goalpulse/goalpulse.log` (~/.local/state/goalpulse/goalpulse.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("goalpulse.log")
    }
}
