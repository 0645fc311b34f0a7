//! Domain error model.

use thiserror::Error;

/// Domain-level error for shared primitives.
///
/// Inventory and shopping failures have their own enums; this one covers the
/// building blocks in this crate (identifier parsing).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
