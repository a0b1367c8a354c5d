//! Cross-cutting error types for txsync.
//!
//! Domain-specific errors (`GatewayError`, `SyncError`, ...) live in their
//! respective crates. The CLI converges them through `anyhow`.

use thiserror::Error;

/// Errors raised by the shared core helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A slug could not be derived because the input had no usable characters.
    #[error("cannot derive a slug from '{0}'")]
    EmptySlug(String),

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
