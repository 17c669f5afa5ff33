//! Application configuration
//!
//! Re-exports `AppConfig` from bosswatch-types and provides persistence
//! through confy plus platform-specific path defaults.

use std::path::{Path, PathBuf};

pub use bosswatch_types::AppConfig;

use super::ConfigError;

const APP_NAME: &str = "bosswatch";
const CONFIG_NAME: &str = "config";
const DATA_FILE_NAME: &str = "boss_timers.json";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// `~/.config/bosswatch` on Linux, `%APPDATA%\bosswatch` on Windows.
/// Falls back to the working directory when no config dir is known.
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence and path resolution
pub trait AppConfigExt: Sized {
    /// Load the config, falling back to defaults if it can't be read.
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    /// Write the config to `path`, creating parent directories.
    fn save_to(&self, path: &Path) -> Result<(), ConfigError>;
    fn config_path() -> Result<PathBuf, ConfigError>;
    /// Effective location of the boss list
    fn data_path(&self) -> PathBuf;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(ConfigError::Save)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Path)
    }

    fn data_path(&self) -> PathBuf {
        match &self.data_file {
            Some(path) => PathBuf::from(path),
            None => app_dir().join(DATA_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_to_writes_a_loadable_config() {
        let dir = std::env::temp_dir().join(format!("bosswatch-config-test-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("config.toml");

        let config = AppConfig {
            live_view: false,
            refresh_every_ticks: 2,
            ..AppConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded: AppConfig = confy::load_path(&path).unwrap();
        assert!(!loaded.live_view);
        assert_eq!(loaded.refresh_every_ticks, 2);
        assert_eq!(loaded.tick_millis, 1000);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn data_path_uses_override() {
        let config = AppConfig::with_data_file("/srv/bosses.json");
        assert_eq!(config.data_path(), PathBuf::from("/srv/bosses.json"));
    }

    #[test]
    fn data_path_defaults_into_app_dir() {
        let path = AppConfig::default().data_path();
        assert!(path.ends_with("boss_timers.json"));
        assert_eq!(path.parent(), Some(app_dir().as_path()));
    }
}
