//! Core error model.

use thiserror::Error;

/// Errors raised while building core primitives from untrusted input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A numeric status outside the catalog's status vocabulary.
    #[error("unknown status code: {0}")]
    UnknownStatus(u16),
}
