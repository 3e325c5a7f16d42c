//! Deploy log entry
//!
//! One line per deployment, appended to the remote log file:
//! `<UTC ISO-8601 timestamp> <invoker> <image> <digest>`

use chrono::{DateTime, Utc};

/// Placeholder recorded when the image digest cannot be resolved
pub const UNKNOWN_DIGEST: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployLogEntry {
    pub timestamp: DateTime<Utc>,
    pub invoker: String,
    pub image: String,
    pub digest: String,
}

impl DeployLogEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        invoker: impl Into<String>,
        image: impl Into<String>,
        digest: Option<String>,
    ) -> Self {
        let digest = digest
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| UNKNOWN_DIGEST.to_string());

        Self {
            timestamp,
            invoker: invoker.into(),
            image: image.into(),
            digest,
        }
    }

    pub fn line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
            self.invoker,
            self.image,
            self.digest
        )
    }
}

impl std::fmt::Display for DeployLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line())
    }
}
