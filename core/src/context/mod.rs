mod config;
mod error;

pub use config::{AppConfig, AppConfigExt, app_dir};
pub use error::ConfigError;
