//! Logging configuration and setup utilities.
//!
//! The runner emits structured `tracing` events (resolution paths at debug,
//! run outcomes at info/warn). This module provides presets and a small setup
//! helper for applications that don't already install a subscriber.

use tracing::Level;

/// Logging configuration for checkgate components.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level for the application
    pub level: Level,
    /// Log level for checkgate components specifically
    pub checkgate_level: Level,
    /// Whether to use JSON output format
    pub json_format: bool,
    /// Environment filter override
    pub env_filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            checkgate_level: Level::DEBUG,
            json_format: false,
            env_filter: None,
        }
    }
}

impl LogConfig {
    /// Creates a configuration for production use.
    pub fn production() -> Self {
        Self {
            level: Level::WARN,
            checkgate_level: Level::INFO,
            json_format: true,
            env_filter: None,
        }
    }

    /// Creates a configuration for development use.
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            checkgate_level: Level::DEBUG,
            json_format: false,
            env_filter: None,
        }
    }

    /// Sets the log level for the application.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets whether to use JSON output format.
    pub fn with_json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }

    /// Sets a custom environment filter.
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Builds the environment filter string.
    pub fn env_filter(&self) -> String {
        if let Some(ref filter) = self.env_filter {
            filter.clone()
        } else {
            format!(
                "{},checkgate={}",
                self.level.as_str().to_lowercase(),
                self.checkgate_level.as_str().to_lowercase()
            )
        }
    }
}

/// Setup helpers for installing a `tracing` subscriber.
pub mod setup {
    use super::LogConfig;

    /// Initializes logging with the given configuration.
    ///
    /// The `RUST_LOG` environment variable takes precedence over the
    /// configured filter when set.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use checkgate::logging::{setup::init_logging, LogConfig};
    ///
    /// init_logging(LogConfig::development()).unwrap();
    /// ```
    pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error>> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer().json().boxed()
        } else {
            tracing_subscriber::fmt::layer().boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }
}
