//! Error types for Stampcard
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Stampcard
#[derive(Debug, Error)]
pub enum StampcardError {
    /// The storage medium could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A stored record failed to deserialize
    #[error("Corrupt record in {collection} at line {line}: {message}")]
    Corrupt {
        collection: String,
        line: usize,
        message: String,
    },

    /// Customer not found in storage
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Input rejected before it reached storage
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Redemption requested for a customer who has not earned a reward
    #[error("Reward not ready for customer: {0}")]
    RewardNotReady(String),

    /// The outbound messaging channel rejected a notification
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StampcardError {
    /// Build a labelled validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for failures caused by caller input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for Stampcard operations
pub type Result<T> = std::result::Result<T, StampcardError>;
