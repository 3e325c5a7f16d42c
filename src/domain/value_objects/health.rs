//! Health probe outcome

/// Result of probing the remote health endpoint. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Endpoint answered successfully
    Healthy,
    /// Probe was not run (dry-run, or no probe tool on the host)
    Skipped(String),
    /// Probe ran and failed
    Failed(String),
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Skipped(_) => "skipped",
            HealthStatus::Failed(_) => "failed",
        }
    }
}
