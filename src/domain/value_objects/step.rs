//! Step value object - one stage of the deploy pipeline
//!
//! Each step carries a fatality class: strict steps abort the run on
//! failure, best-effort steps degrade to a notice.

use serde::Serialize;

/// How a step failure affects the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fatality {
    /// First failure terminates the run
    Strict,
    /// Failure is reported and the run continues
    BestEffort,
}

/// A stage of the deploy pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    KnownHosts,
    LoadKey,
    Connectivity,
    RemoteDir,
    Sync,
    RegistryLogin,
    ComposeValidate,
    ComposePull,
    ComposeUp,
    Digest,
    DeployLog,
    Services,
    HealthCheck,
}

impl Step {
    pub fn fatality(&self) -> Fatality {
        match self {
            Step::KnownHosts | Step::Digest | Step::Services | Step::HealthCheck => {
                Fatality::BestEffort
            }
            _ => Fatality::Strict,
        }
    }

    /// Stable identifier used in JSON events
    pub fn id(&self) -> &'static str {
        match self {
            Step::KnownHosts => "known-hosts",
            Step::LoadKey => "load-key",
            Step::Connectivity => "connectivity",
            Step::RemoteDir => "remote-dir",
            Step::Sync => "sync",
            Step::RegistryLogin => "registry-login",
            Step::ComposeValidate => "compose-validate",
            Step::ComposePull => "compose-pull",
            Step::ComposeUp => "compose-up",
            Step::Digest => "digest",
            Step::DeployLog => "deploy-log",
            Step::Services => "services",
            Step::HealthCheck => "health-check",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Step::KnownHosts => "known hosts update",
            Step::LoadKey => "ssh key load",
            Step::Connectivity => "connectivity check",
            Step::RemoteDir => "remote directory setup",
            Step::Sync => "file sync",
            Step::RegistryLogin => "registry login",
            Step::ComposeValidate => "compose validate",
            Step::ComposePull => "compose pull",
            Step::ComposeUp => "compose up",
            Step::Digest => "digest lookup",
            Step::DeployLog => "deploy log append",
            Step::Services => "service listing",
            Step::HealthCheck => "health check",
        };
        f.write_str(label)
    }
}
