//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use crate::domain::value_objects::{HealthStatus, Step};

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Run started
    Started {
        destination: String,
        remote_dir: String,
        image: String,
        dry_run: bool,
    },

    /// A step began
    StepStarted { step: Step },

    /// A step finished; `detail` carries anything worth showing
    StepCompleted { step: Step, detail: Option<String> },

    /// Dry-run: the step was described instead of performed
    StepAnnounced { step: Step, intent: String },

    /// A best-effort step failed and the run continues
    StepDegraded { step: Step, reason: String },

    /// A step did not apply to this run
    StepSkipped { step: Step, reason: String },

    /// A fatal step failed; the run stops after this
    StepFailed { step: Step, error: String },

    /// Remote command text, for verbose output
    Command { step: Step, script: String },

    /// Run completed
    Completed {
        digest: String,
        health: HealthStatus,
        dry_run: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
