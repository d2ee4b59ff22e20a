//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where configuration problems can surface.

use thiserror::Error;

/// Errors produced by `rg-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
