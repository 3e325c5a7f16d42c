//! Deploy Result
//!
//! Summary of a finished deploy run.

use crate::domain::value_objects::{DeployLogEntry, HealthStatus};

/// Result of a deploy run that reached the end of the pipeline
#[derive(Debug, Clone)]
pub struct DeployReport {
    /// Whether side effects were only announced
    pub dry_run: bool,
    /// Line appended (or announced) to the remote deploy log
    pub log_entry: DeployLogEntry,
    /// `docker compose ps` output, when it was collected
    pub services: Option<String>,
    /// Health probe outcome
    pub health: HealthStatus,
}

impl DeployReport {
    pub fn digest(&self) -> &str {
        &self.log_entry.digest
    }
}
