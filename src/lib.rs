//! # Checkgate - Checkpoint Validation Runner
//!
//! Checkgate resolves and runs data-validation **checkpoints** and translates
//! the pass/fail outcome into either a returned result or a typed error that
//! carries the full result. Checkpoint execution itself is delegated to a
//! pluggable validation engine behind the traits in the [`engine`] module;
//! this crate owns only input precedence, run-name defaulting, and the
//! success/failure branch.
//!
//! ## Quick Start
//!
//! ```rust
//! use checkgate::engine::{InMemoryContext, InMemoryEngine, StaticCheckpoint};
//! use checkgate::{run_validation, ValidationRequest};
//!
//! # async fn example() -> checkgate::Result<()> {
//! // Wire up an engine. InMemoryEngine is the built-in reference
//! // implementation; production pipelines implement the engine traits over
//! // their real validation backend.
//! let engine = InMemoryEngine::builder()
//!     .context(
//!         InMemoryContext::new()
//!             .with_checkpoint(StaticCheckpoint::passing("orders_checkpoint"))
//!             .with_checkpoint(StaticCheckpoint::failing("inventory_checkpoint")),
//!     )
//!     .build();
//!
//! // A passing run returns the engine's result unmodified.
//! let result = run_validation(
//!     &engine,
//!     ValidationRequest::builder()
//!         .checkpoint_name("orders_checkpoint")
//!         .run_name("nightly")
//!         .build(),
//! )
//! .await?;
//! assert!(result.is_success());
//! assert_eq!(result.run_id.run_name, "nightly");
//!
//! // A failing run becomes an error carrying the full result...
//! let err = run_validation(
//!     &engine,
//!     ValidationRequest::builder()
//!         .checkpoint_name("inventory_checkpoint")
//!         .build(),
//! )
//! .await
//! .unwrap_err();
//! assert!(err.validation_result().is_some());
//!
//! // ...unless the request opts out of raising.
//! let result = run_validation(
//!     &engine,
//!     ValidationRequest::builder()
//!         .checkpoint_name("inventory_checkpoint")
//!         .raise_on_failure(false)
//!         .build(),
//! )
//! .await?;
//! assert!(!result.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! ## Input precedence
//!
//! The context and the checkpoint can each be supplied in object form (a
//! pre-built value) or identifier form (a configuration root directory, a
//! checkpoint name). Object forms always win; the ignored identifier form is
//! never validated for consistency. Omitting both context forms asks the
//! engine for default discovery; omitting both checkpoint forms fails fast.
//!
//! ## Architecture
//!
//! - **[`engine`]**: The validation engine seam (`ValidationEngine`,
//!   `DataContext`, `Checkpoint`) plus the in-memory reference engine
//! - **[`request`]**: `ValidationRequest` and its builder
//! - **[`runner`]**: `run_validation`, the single entry point
//! - **[`result`]**: `CheckpointResult` and per-suite outcomes
//! - **[`store`]**: Named, persisted validation configurations
//! - **[`error`]**: The `CheckgateError` taxonomy
//! - **[`logging`]**: `tracing` subscriber presets and setup

pub mod engine;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod request;
pub mod result;
pub mod runner;
pub mod store;

pub use error::{CheckgateError, Result};
pub use request::{ValidationRequest, ValidationRequestBuilder};
pub use result::{CheckpointResult, OutcomeStatus, RunIdentifier, RunStatistics, ValidationOutcome};
pub use runner::run_validation;
