use std::path::{Path, PathBuf};

use bosswatch_core::{
    AppConfig, AppConfigExt, BossRegistry, ConfigError, JsonFileStore, StorageError,
    load_registry, save_registry,
};
use chrono::{Local, NaiveDateTime};

/// Current local wall-clock time, the reference for every countdown.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Holds all state for the CLI session.
///
/// Owned by the main task and passed by reference to command handlers.
/// Nothing else touches the registry.
pub struct CliContext {
    pub config: AppConfig,
    pub registry: BossRegistry,
    store: JsonFileStore,
    /// Where `live` persists settings. `None` keeps them in memory only.
    config_path: Option<PathBuf>,
    /// Header checkbox state, flipped by clicking the selection header
    all_selected: bool,
    /// The stored list could not be read; the exit save must not clobber it
    load_failed: bool,
}

impl CliContext {
    /// Load the boss list from the configured data file.
    ///
    /// A list that fails to load is reported and replaced by an empty one.
    pub fn new(config: AppConfig) -> Self {
        let store = JsonFileStore::new(config.data_path());
        let config_path = AppConfig::config_path()
            .inspect_err(|e| tracing::warn!(error = %e, "Settings will not be persisted"))
            .ok();
        Self::with_store(config, store).with_config_path(config_path)
    }

    pub fn with_store(config: AppConfig, store: JsonFileStore) -> Self {
        let (mut registry, load_failed) = match load_registry(&store) {
            Ok(registry) => (registry, false),
            Err(e) => {
                tracing::warn!(path = %store.path().display(), error = %e, "Failed to load boss list");
                (BossRegistry::new(), true)
            }
        };
        registry.resort(now());

        Self {
            config,
            registry,
            store,
            config_path: None,
            all_selected: false,
            load_failed,
        }
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn store(&self) -> &JsonFileStore {
        &self.store
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// True when the stored list failed to load and nothing has replaced it
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    pub fn set_all_selected(&mut self, selected: bool) {
        self.all_selected = selected;
        self.registry.select_all(selected);
    }

    /// Header checkbox click. Returns the new state.
    pub fn toggle_all(&mut self) -> bool {
        self.set_all_selected(!self.all_selected);
        self.all_selected
    }

    pub fn save(&mut self) -> Result<(), StorageError> {
        save_registry(&self.store, &self.registry)?;
        self.load_failed = false;
        Ok(())
    }

    /// The automatic save at shutdown. Returns whether anything was written.
    ///
    /// Skipped when `save_on_exit` is off, or when the list failed to load
    /// at startup so the unreadable file is left for the user to repair.
    pub fn save_on_exit(&mut self) -> Result<bool, StorageError> {
        if !self.config.save_on_exit {
            return Ok(false);
        }
        if self.load_failed {
            tracing::warn!(
                path = %self.store.path().display(),
                "Boss list failed to load at startup, not saving on exit"
            );
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Persist the settings. Returns false when there is no config file.
    pub fn save_config(&self) -> Result<bool, ConfigError> {
        let Some(path) = &self.config_path else {
            return Ok(false);
        };
        self.config.save_to(path)?;
        Ok(true)
    }

    /// Replace the registry with the stored list.
    ///
    /// On failure the current registry is kept as is.
    pub fn reload(&mut self) -> Result<usize, StorageError> {
        let mut registry = load_registry(&self.store)?;
        registry.resort(now());
        self.registry = registry;
        self.all_selected = false;
        self.load_failed = false;
        Ok(self.registry.len())
    }
}
