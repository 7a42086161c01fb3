//! Store error taxonomy.
//!
//! Callers match on the variant: `Validation` and `NotFound` are
//! user-facing outcomes, `Storage` and `Serialization` are opaque
//! backend failures passed through unchanged.

use thiserror::Error;

/// Result alias used by every store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by the store and its domain rules.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Missing or malformed input (empty credentials, bad weight, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A referenced parcel or invoice does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The key-value backend failed to read or write.
    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),

    /// The document could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity: &str, key: &str) -> Self {
        Self::NotFound(format!("{entity} {key}"))
    }

    /// True for `NotFound`.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True for `Validation`.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
