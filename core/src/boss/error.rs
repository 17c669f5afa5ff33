//! Error types for boss registry operations

use thiserror::Error;

use super::BossId;
use crate::interval::IntervalError;

/// Errors raised by registry mutations. The registry is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error(transparent)]
    InvalidFormat(#[from] IntervalError),

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("no boss with id {id}")]
    NotFound { id: BossId },
}
