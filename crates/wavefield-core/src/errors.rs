//! Error types for configuration-level failures.
//!
//! Geometry never fails: degenerate inputs get well-defined fallback
//! values instead of errors.

use thiserror::Error;

/// Errors raised while validating external configuration input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The material table has no entry for the given key.
    #[error("unknown material key: {0}")]
    UnknownMaterial(String),
}
