//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is a deterministic, recoverable outcome reported back to the
/// caller with enough context to redisplay a corrective form. Nothing here is
/// fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A value failed validation (non-positive quantity, blank required field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier failed to parse (item code, order number).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No catalog entry or order exists for the given key.
    #[error("not found: {0}")]
    NotFound(String),

    /// A display-name lookup matched more than one catalog entry.
    #[error("name '{0}' matches more than one catalog entry")]
    AmbiguousName(String),

    /// The operation collides with existing state (duplicate item code,
    /// double approval).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Requested consumption exceeds the quantity on hand. No mutation has
    /// occurred; the caller may retry with at most `available`.
    #[error("insufficient stock: {available} available")]
    InsufficientStock { available: u32 },
}

impl LedgerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    pub fn ambiguous_name(name: impl Into<String>) -> Self {
        Self::AmbiguousName(name.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn insufficient_stock(available: u32) -> Self {
        Self::InsufficientStock { available }
    }
}
