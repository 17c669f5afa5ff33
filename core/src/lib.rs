pub mod boss;
pub mod context;
pub mod interval;
pub mod scheduler;
pub mod storage;

// Re-exports for convenience
pub use boss::{BossEntry, BossId, BossRegistry, RegistryError, TimerState};
pub use context::{AppConfig, AppConfigExt, ConfigError};
pub use interval::{
    IntervalError, RefreshInterval, format_duration, format_remaining, parse_interval,
};
pub use scheduler::{CountdownScheduler, SchedulerConfig, SchedulerEvent, TickCounter};
pub use storage::{BossStore, JsonFileStore, StorageError, load_registry, save_registry};
