//! The validation runner: resolve inputs, run the checkpoint once, translate
//! the outcome.

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::engine::{Checkpoint, DataContext, ValidationEngine};
use crate::error::{CheckgateError, Result};
use crate::request::ValidationRequest;
use crate::result::{CheckpointResult, RunIdentifier};

/// Runs a checkpoint validation against the given engine.
///
/// Resolution order:
///
/// 1. The effective context is the request's context object if present,
///    otherwise the engine constructs one from the request's root directory
///    (absent meaning default discovery) and runtime environment.
/// 2. The effective checkpoint is the request's checkpoint object if present,
///    otherwise it is looked up by name from the effective context. If the
///    request carries neither form, the call fails with
///    [`CheckgateError::MissingCheckpoint`] before touching the engine.
/// 3. The checkpoint runs once, with the request's run name (or a UTC
///    timestamp when absent) and its configuration overrides.
///
/// The result comes back unmodified whenever the run succeeded, and also when
/// it failed but the request disabled failure raising. A failed run with
/// raising enabled (the default) becomes
/// [`CheckgateError::ValidationFailed`], carrying the full result.
///
/// Engine errors (context load failures, unknown checkpoint names, invalid
/// configuration) propagate unchanged; the runner performs no retries and no
/// local recovery.
///
/// # Examples
///
/// ```rust
/// use checkgate::engine::{InMemoryContext, InMemoryEngine, StaticCheckpoint};
/// use checkgate::{run_validation, ValidationRequest};
///
/// # async fn example() -> checkgate::Result<()> {
/// let engine = InMemoryEngine::builder()
///     .context(
///         InMemoryContext::new()
///             .with_checkpoint(StaticCheckpoint::passing("orders_checkpoint")),
///     )
///     .build();
///
/// let request = ValidationRequest::builder()
///     .checkpoint_name("orders_checkpoint")
///     .run_name("nightly")
///     .build();
///
/// let result = run_validation(&engine, request).await?;
/// assert!(result.is_success());
/// # Ok(())
/// # }
/// ```
#[instrument(skip_all, fields(
    checkpoint.name = ?request.checkpoint_name,
    run.name = ?request.run_name,
    raise_on_failure = request.raise_on_failure,
))]
pub async fn run_validation<E>(
    engine: &E,
    request: ValidationRequest<E::Context>,
) -> Result<CheckpointResult>
where
    E: ValidationEngine,
{
    info!("Running checkpoint validation...");

    let ValidationRequest {
        run_name,
        checkpoint_name,
        checkpoint,
        checkpoint_overrides,
        context_root_dir,
        context,
        runtime_environment,
        raise_on_failure,
    } = request;

    let context = match context {
        Some(context) => {
            debug!("Using provided data context");
            context
        }
        None => {
            debug!(context.root_dir = ?context_root_dir, "Loading data context");
            engine
                .load_context(context_root_dir.as_deref(), &runtime_environment)
                .await?
        }
    };

    let checkpoint = match checkpoint {
        Some(checkpoint) => {
            debug!("Using provided checkpoint");
            checkpoint
        }
        None => {
            let name = checkpoint_name.ok_or(CheckgateError::MissingCheckpoint)?;
            debug!(checkpoint.name = %name, "Loading checkpoint by name");
            context.checkpoint(&name).await?
        }
    };

    let run_id = RunIdentifier::new(run_name.unwrap_or_else(timestamp_run_name));
    let result = checkpoint.run(run_id, &checkpoint_overrides).await?;

    if !result.success {
        warn!(
            run.name = %result.run_id.run_name,
            checkpoint.name = %result.checkpoint_name,
            "Checkpoint validation run failed"
        );
        if raise_on_failure {
            return Err(CheckgateError::ValidationFailed { result });
        }
    } else {
        info!(
            run.name = %result.run_id.run_name,
            checkpoint.name = %result.checkpoint_name,
            "Checkpoint validation run succeeded"
        );
    }

    Ok(result)
}

/// Default run name: a UTC timestamp with microsecond precision.
pub(crate) fn timestamp_run_name() -> String {
    Utc::now().format("%Y%m%dT%H%M%S%.6fZ").to_string()
}
