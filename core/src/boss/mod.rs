//! Boss tracking
//!
//! This module provides:
//! - **Entries**: one tracked boss with its interval and countdown state
//! - **Registry**: the ordered collection the front end renders and mutates
//!
//! # Timer States
//!
//! ```text
//!   add ──► Idle ──start──► Running ──time passes──► Expired
//!                              ▲                         │
//!                              └────────start/reset──────┘
//! ```
//!
//! Expired entries are never cleared automatically and nothing returns to
//! Idle except a reload from storage.

mod entry;
mod error;
mod registry;

#[cfg(test)]
mod registry_tests;

pub use entry::{BossEntry, BossId, TimerState};
pub use error::RegistryError;
pub use registry::BossRegistry;
