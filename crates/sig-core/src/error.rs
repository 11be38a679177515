//! Core error type.
//!
//! The only failure the scheduler core knows about is a malformed snapshot:
//! an empty lane set, a negative count, a repeated lane name, or a config
//! whose throughput could never drain a lane.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Shorthand result type for `sig-core`.
pub type CoreResult<T> = Result<T, CoreError>;
