//! Result types produced by running a checkpoint.
//!
//! These types are produced by [`Checkpoint::run`](crate::engine::Checkpoint::run)
//! implementations and passed through the runner unmodified. The runner only
//! ever reads the `success` flag to decide whether to return or fail.

use crate::engine::CheckpointOverrides;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies a single validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunIdentifier {
    /// Human-readable name of the run.
    pub run_name: String,
    /// UTC time the run was started.
    pub run_time: DateTime<Utc>,
}

impl RunIdentifier {
    /// Creates a run identifier stamped with the current time.
    pub fn new(run_name: impl Into<String>) -> Self {
        Self {
            run_name: run_name.into(),
            run_time: Utc::now(),
        }
    }

    /// Creates a run identifier with an explicit run time.
    pub fn at(run_name: impl Into<String>, run_time: DateTime<Utc>) -> Self {
        Self {
            run_name: run_name.into(),
            run_time,
        }
    }
}

/// The status of a single validated expectation suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// Every expectation in the suite passed
    Success,
    /// At least one expectation in the suite failed
    Failure,
    /// The suite was not evaluated (e.g., no batch data)
    Skipped,
}

impl OutcomeStatus {
    /// Returns true if this is a Success status.
    pub fn is_success(&self) -> bool {
        matches!(self, OutcomeStatus::Success)
    }

    /// Returns true if this is a Failure status.
    pub fn is_failure(&self) -> bool {
        matches!(self, OutcomeStatus::Failure)
    }

    /// Returns true if this is a Skipped status.
    pub fn is_skipped(&self) -> bool {
        matches!(self, OutcomeStatus::Skipped)
    }
}

/// The outcome of validating one expectation suite within a checkpoint run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// The expectation suite that was evaluated
    pub suite_name: String,
    /// The status of the evaluation
    pub status: OutcomeStatus,
    /// Number of expectations evaluated
    pub evaluated_expectations: u32,
    /// Number of expectations that failed
    pub failed_expectations: u32,
    /// Optional message providing additional context
    pub message: Option<String>,
    /// Optional structured detail payload from the engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ValidationOutcome {
    /// Creates a passing outcome for a suite.
    pub fn passed(suite_name: impl Into<String>, evaluated_expectations: u32) -> Self {
        Self {
            suite_name: suite_name.into(),
            status: OutcomeStatus::Success,
            evaluated_expectations,
            failed_expectations: 0,
            message: None,
            details: None,
        }
    }

    /// Creates a failing outcome for a suite.
    pub fn failed(
        suite_name: impl Into<String>,
        evaluated_expectations: u32,
        failed_expectations: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            suite_name: suite_name.into(),
            status: OutcomeStatus::Failure,
            evaluated_expectations,
            failed_expectations,
            message: Some(message.into()),
            details: None,
        }
    }

    /// Creates a skipped outcome for a suite.
    pub fn skipped(suite_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
            status: OutcomeStatus::Skipped,
            evaluated_expectations: 0,
            failed_expectations: 0,
            message: Some(message.into()),
            details: None,
        }
    }

    /// Attaches a structured detail payload to the outcome.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Aggregate statistics over a checkpoint run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Number of expectation suites evaluated
    pub evaluated_validations: u32,
    /// Number of suites that passed
    pub successful_validations: u32,
    /// Number of suites that failed
    pub unsuccessful_validations: u32,
    /// Percentage of evaluated suites that passed
    pub success_percent: f64,
}

/// The full result of executing a checkpoint once.
///
/// Constructed by [`Checkpoint::run`](crate::engine::Checkpoint::run)
/// implementations; the runner passes it through unchanged. Overall success
/// is derived from the suite outcomes: a run succeeds when no outcome failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointResult {
    /// The run this result belongs to
    pub run_id: RunIdentifier,
    /// The checkpoint that produced the result
    pub checkpoint_name: String,
    /// Whether every evaluated suite passed
    pub success: bool,
    /// Per-suite outcomes
    pub outcomes: Vec<ValidationOutcome>,
    /// Effective configuration the checkpoint ran with, overrides applied
    #[serde(default, skip_serializing_if = "CheckpointOverrides::is_empty")]
    pub checkpoint_config: CheckpointOverrides,
}

impl CheckpointResult {
    /// Creates a result from per-suite outcomes, deriving the success flag.
    pub fn new(
        run_id: RunIdentifier,
        checkpoint_name: impl Into<String>,
        outcomes: Vec<ValidationOutcome>,
    ) -> Self {
        let success = outcomes.iter().all(|o| !o.status.is_failure());
        Self {
            run_id,
            checkpoint_name: checkpoint_name.into(),
            success,
            outcomes,
            checkpoint_config: CheckpointOverrides::new(),
        }
    }

    /// Records the effective checkpoint configuration on the result.
    pub fn with_checkpoint_config(mut self, config: CheckpointOverrides) -> Self {
        self.checkpoint_config = config;
        self
    }

    /// Returns true if every evaluated suite passed.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Computes aggregate statistics over the suite outcomes.
    ///
    /// Skipped suites count toward neither successes nor failures, matching
    /// how the success flag ignores them.
    pub fn statistics(&self) -> RunStatistics {
        let evaluated = self
            .outcomes
            .iter()
            .filter(|o| !o.status.is_skipped())
            .count() as u32;
        let successful = self
            .outcomes
            .iter()
            .filter(|o| o.status.is_success())
            .count() as u32;
        let unsuccessful = evaluated - successful;
        let success_percent = if evaluated == 0 {
            100.0
        } else {
            f64::from(successful) / f64::from(evaluated) * 100.0
        };
        RunStatistics {
            evaluated_validations: evaluated,
            successful_validations: successful,
            unsuccessful_validations: unsuccessful,
            success_percent,
        }
    }
}
