//! Validation request: the call-scoped bundle of runner inputs.

use std::path::PathBuf;

use crate::engine::{CheckpointOverrides, DataContext, RuntimeEnvironment};

/// The inputs to a single validation run.
///
/// Every field is optional. The context and the checkpoint can each be given
/// in object form (a pre-built value) or identifier form (a root directory, a
/// name); when both forms are present the object form wins and the identifier
/// form is silently ignored. At minimum, one form of the checkpoint must be
/// supplied; the context may be omitted entirely, which asks the engine for
/// default discovery.
///
/// # Examples
///
/// ```rust
/// use checkgate::engine::InMemoryContext;
/// use checkgate::ValidationRequest;
///
/// let request = ValidationRequest::<InMemoryContext>::builder()
///     .checkpoint_name("orders_checkpoint")
///     .context_root_dir("/etc/validation")
///     .run_name("nightly-2026-08-29")
///     .raise_on_failure(false)
///     .build();
/// assert_eq!(request.checkpoint_name(), Some("orders_checkpoint"));
/// ```
#[derive(Debug)]
pub struct ValidationRequest<C: DataContext> {
    pub(crate) run_name: Option<String>,
    pub(crate) checkpoint_name: Option<String>,
    pub(crate) checkpoint: Option<C::Checkpoint>,
    pub(crate) checkpoint_overrides: CheckpointOverrides,
    pub(crate) context_root_dir: Option<PathBuf>,
    pub(crate) context: Option<C>,
    pub(crate) runtime_environment: RuntimeEnvironment,
    pub(crate) raise_on_failure: bool,
}

impl<C: DataContext> ValidationRequest<C> {
    /// Creates a new builder for constructing a validation request.
    pub fn builder() -> ValidationRequestBuilder<C> {
        ValidationRequestBuilder::new()
    }

    /// Returns the requested run name, if one was supplied.
    pub fn run_name(&self) -> Option<&str> {
        self.run_name.as_deref()
    }

    /// Returns the identifier-form checkpoint name, if one was supplied.
    pub fn checkpoint_name(&self) -> Option<&str> {
        self.checkpoint_name.as_deref()
    }

    /// Returns the identifier-form context root directory, if one was supplied.
    pub fn context_root_dir(&self) -> Option<&std::path::Path> {
        self.context_root_dir.as_deref()
    }

    /// Returns whether a failed run turns into an error.
    pub fn raise_on_failure(&self) -> bool {
        self.raise_on_failure
    }
}

/// Builder for [`ValidationRequest`] instances.
#[derive(Debug)]
pub struct ValidationRequestBuilder<C: DataContext> {
    run_name: Option<String>,
    checkpoint_name: Option<String>,
    checkpoint: Option<C::Checkpoint>,
    checkpoint_overrides: CheckpointOverrides,
    context_root_dir: Option<PathBuf>,
    context: Option<C>,
    runtime_environment: RuntimeEnvironment,
    raise_on_failure: bool,
}

impl<C: DataContext> ValidationRequestBuilder<C> {
    /// Creates a builder with no inputs and failure raising enabled.
    pub fn new() -> Self {
        Self {
            run_name: None,
            checkpoint_name: None,
            checkpoint: None,
            checkpoint_overrides: CheckpointOverrides::new(),
            context_root_dir: None,
            context: None,
            runtime_environment: RuntimeEnvironment::new(),
            raise_on_failure: true,
        }
    }

    /// Sets the run name. Defaults to a UTC timestamp when absent.
    pub fn run_name(mut self, run_name: impl Into<String>) -> Self {
        self.run_name = Some(run_name.into());
        self
    }

    /// Sets the name of the checkpoint to look up from the effective context.
    ///
    /// Ignored when a checkpoint object is also supplied.
    pub fn checkpoint_name(mut self, checkpoint_name: impl Into<String>) -> Self {
        self.checkpoint_name = Some(checkpoint_name.into());
        self
    }

    /// Sets a pre-built checkpoint. Takes precedence over `checkpoint_name`.
    pub fn checkpoint(mut self, checkpoint: C::Checkpoint) -> Self {
        self.checkpoint = Some(checkpoint);
        self
    }

    /// Adds a single configuration override applied at execution time.
    pub fn checkpoint_override(
        mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        self.checkpoint_overrides.insert(key.into(), value);
        self
    }

    /// Merges a map of configuration overrides applied at execution time.
    pub fn checkpoint_overrides(mut self, overrides: CheckpointOverrides) -> Self {
        self.checkpoint_overrides.extend(overrides);
        self
    }

    /// Sets the configuration root directory for context construction.
    ///
    /// Ignored when a context object is also supplied. When neither is
    /// supplied the engine performs default discovery.
    pub fn context_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.context_root_dir = Some(root_dir.into());
        self
    }

    /// Sets a pre-built data context. Takes precedence over `context_root_dir`.
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Adds a single runtime environment override applied during context
    /// construction.
    pub fn runtime_setting(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.runtime_environment.insert(key.into(), value);
        self
    }

    /// Merges a map of runtime environment overrides.
    pub fn runtime_environment(mut self, runtime_environment: RuntimeEnvironment) -> Self {
        self.runtime_environment.extend(runtime_environment);
        self
    }

    /// Sets whether a failed run turns into an error. Defaults to true.
    pub fn raise_on_failure(mut self, raise_on_failure: bool) -> Self {
        self.raise_on_failure = raise_on_failure;
        self
    }

    /// Builds the `ValidationRequest` instance.
    pub fn build(self) -> ValidationRequest<C> {
        ValidationRequest {
            run_name: self.run_name,
            checkpoint_name: self.checkpoint_name,
            checkpoint: self.checkpoint,
            checkpoint_overrides: self.checkpoint_overrides,
            context_root_dir: self.context_root_dir,
            context: self.context,
            runtime_environment: self.runtime_environment,
            raise_on_failure: self.raise_on_failure,
        }
    }
}

impl<C: DataContext> Default for ValidationRequestBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::InMemoryContext;

    #[test]
    fn test_builder_defaults() {
        let request = ValidationRequest::<InMemoryContext>::builder().build();
        assert!(request.run_name().is_none());
        assert!(request.checkpoint_name().is_none());
        assert!(request.context_root_dir().is_none());
        assert!(request.raise_on_failure());
        assert!(request.checkpoint_overrides.is_empty());
        assert!(request.runtime_environment.is_empty());
    }

    #[test]
    fn test_builder_collects_overrides() {
        let request = ValidationRequest::<InMemoryContext>::builder()
            .checkpoint_name("cp")
            .checkpoint_override("suite", serde_json::json!("nightly"))
            .checkpoint_override("site", serde_json::json!("local"))
            .runtime_setting("datasource", serde_json::json!("warehouse"))
            .build();

        assert_eq!(request.checkpoint_overrides.len(), 2);
        assert_eq!(
            request.runtime_environment.get("datasource"),
            Some(&serde_json::json!("warehouse"))
        );
    }

    #[test]
    fn test_path_coercion() {
        let request = ValidationRequest::<InMemoryContext>::builder()
            .context_root_dir("/etc/validation")
            .build();
        assert_eq!(
            request.context_root_dir(),
            Some(std::path::Path::new("/etc/validation"))
        );
    }
}
