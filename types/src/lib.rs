//! Shared configuration and record types for bosswatch
//!
//! This crate contains the serializable types shared between the core
//! (persistence, configuration loading) and the terminal front end.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Persisted Boss Record
// ─────────────────────────────────────────────────────────────────────────────

/// The persisted shape of one tracked boss.
///
/// Only the static fields are stored. Countdown state and selection are
/// runtime-only, so every reload starts with all timers idle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossRecord {
    pub map: String,
    pub level: String,
    /// Interval text as the user entered it, e.g. `1:30:00`
    #[serde(alias = "refreshInterval")]
    pub refresh_interval: String,
}

impl BossRecord {
    pub fn new(
        map: impl Into<String>,
        level: impl Into<String>,
        refresh_interval: impl Into<String>,
    ) -> Self {
        Self {
            map: map.into(),
            level: level.into(),
            refresh_interval: refresh_interval.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Config
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}

fn default_tick_millis() -> u64 {
    1000
}

fn default_refresh_every_ticks() -> u32 {
    5
}

/// Application configuration, persisted through confy.
///
/// Loading and saving live in `bosswatch-core` (`AppConfigExt`) since they
/// need platform directory lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Override for the boss list file. `None` uses the platform config dir.
    #[serde(default)]
    pub data_file: Option<String>,

    /// Scheduler tick length in milliseconds.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,

    /// Number of ticks between re-sort/redisplay passes.
    #[serde(default = "default_refresh_every_ticks")]
    pub refresh_every_ticks: u32,

    /// Write the boss list back to disk on exit.
    #[serde(default = "default_true")]
    pub save_on_exit: bool,

    /// Redraw the boss table on every refresh pass.
    #[serde(default = "default_true")]
    pub live_view: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            tick_millis: default_tick_millis(),
            refresh_every_ticks: default_refresh_every_ticks(),
            save_on_exit: true,
            live_view: true,
        }
    }
}

impl AppConfig {
    /// Create a config that stores the boss list at the given path.
    /// Other fields use their default values.
    pub fn with_data_file(data_file: impl Into<String>) -> Self {
        Self {
            data_file: Some(data_file.into()),
            ..Self::default()
        }
    }
}
