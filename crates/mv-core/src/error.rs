//! Core error type.
//!
//! `mv-graph` wraps `CoreError` as one variant of its own `GraphError` so
//! configuration failures surface through a single result type.

use thiserror::Error;

/// Errors produced by `mv-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mv-core`.
pub type CoreResult<T> = Result<T, CoreError>;
