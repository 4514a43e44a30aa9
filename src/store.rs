//! Persisted validation configurations.
//!
//! A [`ValidationConfig`] is the identifier-form template of a
//! [`ValidationRequest`](crate::ValidationRequest): everything a run needs
//! except pre-built objects. Stores keep named configs so pipelines can share
//! and reuse them across runs; [`FileConfigStore`] persists each one as a JSON
//! document under a directory.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::engine::{CheckpointOverrides, DataContext, RuntimeEnvironment};
use crate::error::{CheckgateError, Result};
use crate::request::ValidationRequest;

/// A reusable, serializable validation request template.
///
/// Holds only identifier-form inputs; object-form inputs (contexts,
/// checkpoints) are call-scoped and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Run name; a timestamp is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_name: Option<String>,
    /// Name of the checkpoint to look up from the effective context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint_name: Option<String>,
    /// Configuration overrides merged at execution time
    #[serde(default, skip_serializing_if = "CheckpointOverrides::is_empty")]
    pub checkpoint_overrides: CheckpointOverrides,
    /// Configuration root directory for context construction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_root_dir: Option<PathBuf>,
    /// Overrides applied during context construction
    #[serde(default, skip_serializing_if = "RuntimeEnvironment::is_empty")]
    pub runtime_environment: RuntimeEnvironment,
    /// Whether a failed run turns into an error
    #[serde(default = "default_raise_on_failure")]
    pub raise_on_failure: bool,
}

fn default_raise_on_failure() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            run_name: None,
            checkpoint_name: None,
            checkpoint_overrides: CheckpointOverrides::new(),
            context_root_dir: None,
            runtime_environment: RuntimeEnvironment::new(),
            raise_on_failure: true,
        }
    }
}

impl ValidationConfig {
    /// Creates an empty config with failure raising enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config for a named checkpoint.
    pub fn for_checkpoint(checkpoint_name: impl Into<String>) -> Self {
        Self {
            checkpoint_name: Some(checkpoint_name.into()),
            ..Self::default()
        }
    }

    /// Converts the template into a request for the given context type.
    pub fn into_request<C: DataContext>(self) -> ValidationRequest<C> {
        let mut builder = ValidationRequest::<C>::builder()
            .checkpoint_overrides(self.checkpoint_overrides)
            .runtime_environment(self.runtime_environment)
            .raise_on_failure(self.raise_on_failure);
        if let Some(run_name) = self.run_name {
            builder = builder.run_name(run_name);
        }
        if let Some(checkpoint_name) = self.checkpoint_name {
            builder = builder.checkpoint_name(checkpoint_name);
        }
        if let Some(root_dir) = self.context_root_dir {
            builder = builder.context_root_dir(root_dir);
        }
        builder.build()
    }
}

/// A named store of validation configurations.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Saves a config under the given name.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidConfiguration`](CheckgateError::InvalidConfiguration)
    /// when the name is already taken and `overwrite` is false.
    async fn save(&self, name: &str, config: &ValidationConfig, overwrite: bool) -> Result<()>;

    /// Loads the config stored under the given name.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigNotFound`](CheckgateError::ConfigNotFound) when no
    /// config has that name.
    async fn load(&self, name: &str) -> Result<ValidationConfig>;

    /// Deletes the config stored under the given name.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigNotFound`](CheckgateError::ConfigNotFound) when no
    /// config has that name.
    async fn delete(&self, name: &str) -> Result<()>;

    /// Lists the names of all stored configs, sorted.
    async fn list(&self) -> Result<Vec<String>>;
}

/// A config store backed by JSON documents in a directory.
///
/// Each config lives at `<dir>/<name>.json`. Names are restricted to
/// ASCII alphanumerics plus `.`, `_`, and `-` so they stay path-safe.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    dir: PathBuf,
}

impl FileConfigStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory this store persists into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(CheckgateError::invalid_config(format!(
                "config name '{name}' must be non-empty and contain only alphanumerics, '.', '_', or '-'"
            )));
        }
        Ok(self.dir.join(format!("{name}.json")))
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn save(&self, name: &str, config: &ValidationConfig, overwrite: bool) -> Result<()> {
        let path = self.path_for(name)?;
        if !overwrite && tokio::fs::try_exists(&path).await? {
            return Err(CheckgateError::invalid_config(format!(
                "config '{name}' already exists; pass overwrite to replace it"
            )));
        }
        tokio::fs::create_dir_all(&self.dir).await?;
        let payload = serde_json::to_vec_pretty(config)?;
        tokio::fs::write(&path, payload).await?;
        debug!(config.name = %name, config.path = %path.display(), "Saved validation config");
        Ok(())
    }

    async fn load(&self, name: &str) -> Result<ValidationConfig> {
        let path = self.path_for(name)?;
        let payload = match tokio::fs::read(&path).await {
            Ok(payload) => payload,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CheckgateError::ConfigNotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&payload)?)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CheckgateError::ConfigNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(names),
            Err(e) => return Err(e.into()),
        };
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
