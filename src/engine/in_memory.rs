//! In-memory validation engine.
//!
//! A complete reference implementation of the engine traits, useful for tests
//! and for wiring the runner into a pipeline before a real engine exists.
//! Contexts are registered up front, keyed by configuration root directory,
//! with an optional default-discovery context; checkpoints carry pre-scripted
//! suite outcomes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{
    Checkpoint, CheckpointOverrides, DataContext, RuntimeEnvironment, ValidationEngine,
};
use crate::error::{CheckgateError, Result};
use crate::result::{CheckpointResult, RunIdentifier, ValidationOutcome};

/// An engine holding pre-registered contexts.
///
/// # Examples
///
/// ```rust
/// use checkgate::engine::{InMemoryContext, InMemoryEngine, StaticCheckpoint};
///
/// let engine = InMemoryEngine::builder()
///     .context(
///         InMemoryContext::new()
///             .with_checkpoint(StaticCheckpoint::passing("orders_checkpoint")),
///     )
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEngine {
    default_context: Option<InMemoryContext>,
    contexts: HashMap<PathBuf, InMemoryContext>,
}

impl InMemoryEngine {
    /// Creates a new builder for constructing an in-memory engine.
    pub fn builder() -> InMemoryEngineBuilder {
        InMemoryEngineBuilder::default()
    }
}

#[async_trait]
impl ValidationEngine for InMemoryEngine {
    type Context = InMemoryContext;

    async fn load_context(
        &self,
        root_dir: Option<&Path>,
        runtime_environment: &RuntimeEnvironment,
    ) -> Result<InMemoryContext> {
        let context = match root_dir {
            Some(dir) => self.contexts.get(dir).cloned().ok_or_else(|| {
                CheckgateError::context_load(format!(
                    "no data context registered at '{}'",
                    dir.display()
                ))
            })?,
            None => self.default_context.clone().ok_or_else(|| {
                CheckgateError::context_load("no default data context registered")
            })?,
        };
        Ok(context.with_runtime_environment(runtime_environment.clone()))
    }
}

/// Builder for [`InMemoryEngine`].
#[derive(Debug, Default)]
pub struct InMemoryEngineBuilder {
    default_context: Option<InMemoryContext>,
    contexts: HashMap<PathBuf, InMemoryContext>,
}

impl InMemoryEngineBuilder {
    /// Registers the context returned by default discovery.
    pub fn context(mut self, context: InMemoryContext) -> Self {
        self.default_context = Some(context);
        self
    }

    /// Registers a context for a specific configuration root directory.
    pub fn context_at(mut self, root_dir: impl Into<PathBuf>, context: InMemoryContext) -> Self {
        self.contexts.insert(root_dir.into(), context);
        self
    }

    /// Builds the engine.
    pub fn build(self) -> InMemoryEngine {
        InMemoryEngine {
            default_context: self.default_context,
            contexts: self.contexts,
        }
    }
}

/// A data context holding named checkpoints in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContext {
    checkpoints: HashMap<String, StaticCheckpoint>,
    runtime_environment: RuntimeEnvironment,
}

impl InMemoryContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a checkpoint to the context, keyed by its name.
    pub fn with_checkpoint(mut self, checkpoint: StaticCheckpoint) -> Self {
        self.checkpoints
            .insert(checkpoint.name().to_string(), checkpoint);
        self
    }

    /// Removes a checkpoint from the context.
    pub fn without_checkpoint(mut self, name: &str) -> Self {
        self.checkpoints.remove(name);
        self
    }

    /// Returns the runtime environment this context was loaded with.
    pub fn runtime_environment(&self) -> &RuntimeEnvironment {
        &self.runtime_environment
    }

    fn with_runtime_environment(mut self, runtime_environment: RuntimeEnvironment) -> Self {
        self.runtime_environment.extend(runtime_environment);
        self
    }
}

#[async_trait]
impl DataContext for InMemoryContext {
    type Checkpoint = StaticCheckpoint;

    async fn checkpoint(&self, name: &str) -> Result<StaticCheckpoint> {
        self.checkpoints
            .get(name)
            .cloned()
            .ok_or_else(|| CheckgateError::CheckpointNotFound(name.to_string()))
    }
}

/// A checkpoint whose suite outcomes are scripted at construction time.
///
/// Running it echoes the supplied run identifier and records the merged
/// configuration (base config with overrides applied) on the result.
#[derive(Debug, Clone)]
pub struct StaticCheckpoint {
    name: String,
    config: CheckpointOverrides,
    outcomes: Vec<ValidationOutcome>,
}

impl StaticCheckpoint {
    /// Creates a checkpoint with the given suite outcomes.
    pub fn new(name: impl Into<String>, outcomes: Vec<ValidationOutcome>) -> Self {
        Self {
            name: name.into(),
            config: CheckpointOverrides::new(),
            outcomes,
        }
    }

    /// Creates a checkpoint whose single suite passes.
    pub fn passing(name: impl Into<String>) -> Self {
        let name = name.into();
        let suite = format!("{name}.suite");
        Self::new(name, vec![ValidationOutcome::passed(suite, 1)])
    }

    /// Creates a checkpoint whose single suite fails.
    pub fn failing(name: impl Into<String>) -> Self {
        let name = name.into();
        let suite = format!("{name}.suite");
        Self::new(
            name,
            vec![ValidationOutcome::failed(suite, 1, 1, "1 of 1 expectations failed")],
        )
    }

    /// Sets the checkpoint's base configuration.
    pub fn with_config(mut self, config: CheckpointOverrides) -> Self {
        self.config = config;
        self
    }

    /// Returns the checkpoint's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl Checkpoint for StaticCheckpoint {
    async fn run(
        &self,
        run_id: RunIdentifier,
        overrides: &CheckpointOverrides,
    ) -> Result<CheckpointResult> {
        let mut config = self.config.clone();
        config.extend(overrides.clone());
        Ok(
            CheckpointResult::new(run_id, &self.name, self.outcomes.clone())
                .with_checkpoint_config(config),
        )
    }
}
