//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant (see `lift_sim::SimError`).

use thiserror::Error;

/// Errors raised by `lift-core`, mostly configuration problems detected
/// before the first tick runs.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core`.
pub type LiftResult<T> = Result<T, LiftError>;
