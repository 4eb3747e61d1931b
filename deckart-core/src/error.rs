//! Error types for card and scene (de)serialization.
//!
//! Art generation itself never fails; these only cover JSON boundaries.

use thiserror::Error;

/// Result type for card operations.
pub type CardResult<T> = Result<T, CardError>;

/// Errors that can occur when loading or dumping cards and scenes.
#[derive(Debug, Error)]
pub enum CardError {
    /// Card or scene serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
