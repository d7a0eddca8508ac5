//! Crate error type.
//!
//! Sub-crates define their own error enums and either convert `LiftError`
//! into them via `#[from]` or keep them separate.  Configuration problems
//! are always reported before the first tick runs — nothing in the tick
//! loop itself constructs a `LiftError::Config`.

use thiserror::Error;

/// The top-level error type for `lift-core` and a common base for the
/// other `lift-*` crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("passenger origin floor {origin} equals target floor {target}")]
    InvalidPassenger { origin: i32, target: i32 },
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
