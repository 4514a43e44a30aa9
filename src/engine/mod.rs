//! The validation engine seam.
//!
//! This module defines the traits a validation engine must implement for the
//! runner to drive it: an engine constructs data contexts, a context looks up
//! named checkpoints, and a checkpoint runs once and produces a
//! [`CheckpointResult`]. The crate never evaluates expectations itself; all
//! execution semantics live behind these traits.
//!
//! Implementations signal their own failures ([`ContextLoad`],
//! [`CheckpointNotFound`], [`InvalidConfiguration`]); the runner propagates
//! them unchanged and owns only the final success/failure branch.
//!
//! [`ContextLoad`]: crate::error::CheckgateError::ContextLoad
//! [`CheckpointNotFound`]: crate::error::CheckgateError::CheckpointNotFound
//! [`InvalidConfiguration`]: crate::error::CheckgateError::InvalidConfiguration

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::Path;

use crate::error::Result;
use crate::result::{CheckpointResult, RunIdentifier};

pub mod in_memory;

pub use in_memory::{InMemoryContext, InMemoryEngine, StaticCheckpoint};

/// Override values applied while an engine constructs a data context.
pub type RuntimeEnvironment = HashMap<String, serde_json::Value>;

/// Override values merged into a checkpoint's configuration at execution time.
pub type CheckpointOverrides = HashMap<String, serde_json::Value>;

/// A validation engine that can construct data contexts.
///
/// The entry point of the seam. `load_context(None, ..)` means default
/// discovery: the engine locates its configuration root however it sees fit
/// (environment, working directory, a built-in default).
#[async_trait]
pub trait ValidationEngine: Debug + Send + Sync {
    /// The context type this engine produces.
    type Context: DataContext;

    /// Constructs a data context.
    ///
    /// # Arguments
    ///
    /// * `root_dir` - Configuration root to load from, or `None` for default
    ///   discovery
    /// * `runtime_environment` - Override values applied during construction
    ///
    /// # Errors
    ///
    /// Returns [`ContextLoad`](crate::error::CheckgateError::ContextLoad) when
    /// no context can be constructed or discovered.
    async fn load_context(
        &self,
        root_dir: Option<&Path>,
        runtime_environment: &RuntimeEnvironment,
    ) -> Result<Self::Context>;
}

/// A data context: the configuration root that owns named checkpoints.
#[async_trait]
pub trait DataContext: Debug + Send + Sync {
    /// The checkpoint type this context produces.
    type Checkpoint: Checkpoint;

    /// Looks up a checkpoint by name.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`CheckpointNotFound`](crate::error::CheckgateError::CheckpointNotFound)
    /// when the context has no checkpoint with that name.
    async fn checkpoint(&self, name: &str) -> Result<Self::Checkpoint>;
}

/// A runnable checkpoint: a named bundle of expectation-suite validations.
#[async_trait]
pub trait Checkpoint: Debug + Send + Sync {
    /// Runs the checkpoint once.
    ///
    /// # Arguments
    ///
    /// * `run_id` - Identifier for this run; implementations must echo it on
    ///   the returned result
    /// * `overrides` - Configuration values merged over the checkpoint's own
    ///   configuration for this run only
    async fn run(
        &self,
        run_id: RunIdentifier,
        overrides: &CheckpointOverrides,
    ) -> Result<CheckpointResult>;
}
