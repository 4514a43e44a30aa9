//! Error types for checkpoint validation runs.

use crate::result::CheckpointResult;
use thiserror::Error;

/// Result type for checkgate operations.
pub type Result<T> = std::result::Result<T, CheckgateError>;

/// Errors that can occur while resolving or running a checkpoint validation.
#[derive(Debug, Error)]
pub enum CheckgateError {
    /// The checkpoint ran to completion and reported failure.
    ///
    /// Raised only when the request opted into failure raising. Carries the
    /// full [`CheckpointResult`] so callers can inspect per-suite detail.
    #[error(
        "checkpoint validation run '{}' failed; check the result on this error for details",
        .result.run_id.run_name
    )]
    ValidationFailed {
        /// The complete result of the failed run.
        result: CheckpointResult,
    },

    /// Neither a checkpoint object nor a checkpoint name was supplied.
    #[error("no checkpoint specified: provide either a checkpoint object or a checkpoint name")]
    MissingCheckpoint,

    /// The engine could not construct or discover a data context.
    #[error("failed to load data context: {message}")]
    ContextLoad { message: String },

    /// The effective context has no checkpoint with the requested name.
    #[error("checkpoint not found: {0}")]
    CheckpointNotFound(String),

    /// Malformed engine or store configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No stored validation configuration with the requested name.
    #[error("stored validation configuration not found: {0}")]
    ConfigNotFound(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CheckgateError {
    /// Creates a context load error with the given message.
    pub fn context_load(message: impl Into<String>) -> Self {
        Self::ContextLoad {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error with the given message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Returns the wrapped checkpoint result when this is a validation failure.
    pub fn validation_result(&self) -> Option<&CheckpointResult> {
        match self {
            Self::ValidationFailed { result } => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{CheckpointResult, RunIdentifier, ValidationOutcome};

    #[test]
    fn test_validation_failed_carries_result() {
        let result = CheckpointResult::new(
            RunIdentifier::new("nightly"),
            "orders_checkpoint",
            vec![ValidationOutcome::failed("orders", 4, 1, "1 of 4 failed")],
        );
        let err = CheckgateError::ValidationFailed { result };

        let carried = err.validation_result().expect("result should be attached");
        assert!(!carried.success);
        assert_eq!(carried.run_id.run_name, "nightly");
        assert!(err.to_string().contains("nightly"));
    }

    #[test]
    fn test_non_failure_errors_carry_no_result() {
        assert!(CheckgateError::MissingCheckpoint.validation_result().is_none());
        assert!(CheckgateError::CheckpointNotFound("x".into())
            .validation_result()
            .is_none());
    }
}
