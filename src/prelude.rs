//! Prelude for commonly used types and traits in checkgate.

pub use crate::engine::{
    Checkpoint, CheckpointOverrides, DataContext, RuntimeEnvironment, ValidationEngine,
};
pub use crate::error::{CheckgateError, Result};
pub use crate::logging::LogConfig;
pub use crate::request::ValidationRequest;
pub use crate::result::{CheckpointResult, RunIdentifier, ValidationOutcome};
pub use crate::runner::run_validation;
pub use crate::store::{ConfigStore, ValidationConfig};
