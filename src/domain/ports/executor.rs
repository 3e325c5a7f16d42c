//! Executor Port
//!
//! The pipeline expresses every side effect as an [`Action`]. An executor
//! either performs it against a remote host or only describes it, and is
//! chosen once at startup.

use std::path::PathBuf;
use thiserror::Error;

use super::remote_host::RemoteError;
use super::trust_provider::AgentEnv;
use crate::domain::value_objects::{ComposeProject, DeployLogEntry, Secret, SshTarget, Step};

/// Whether side effects are performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Live,
    DryRun,
}

/// A side effect the deploy pipeline needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CheckConnectivity,
    EnsureRemoteDir {
        path: String,
    },
    SyncFiles {
        sources: Vec<PathBuf>,
        remote_dir: String,
    },
    RegistryLogin {
        registry: String,
        username: String,
        token: Secret,
    },
    ComposeValidate(ComposeProject),
    ComposePull(ComposeProject),
    ComposeUp(ComposeProject),
    ResolveDigest {
        image: String,
    },
    AppendLog {
        log_path: String,
        entry: DeployLogEntry,
    },
    ListServices(ComposeProject),
    HealthProbe {
        url: String,
    },
}

impl Action {
    /// The pipeline step this action belongs to
    pub fn step(&self) -> Step {
        match self {
            Action::CheckConnectivity => Step::Connectivity,
            Action::EnsureRemoteDir { .. } => Step::RemoteDir,
            Action::SyncFiles { .. } => Step::Sync,
            Action::RegistryLogin { .. } => Step::RegistryLogin,
            Action::ComposeValidate(_) => Step::ComposeValidate,
            Action::ComposePull(_) => Step::ComposePull,
            Action::ComposeUp(_) => Step::ComposeUp,
            Action::ResolveDigest { .. } => Step::Digest,
            Action::AppendLog { .. } => Step::DeployLog,
            Action::ListServices(_) => Step::Services,
            Action::HealthProbe { .. } => Step::HealthCheck,
        }
    }

    /// Human-readable statement of what this action would do on `target`
    pub fn describe(&self, target: &SshTarget) -> String {
        match self {
            Action::CheckConnectivity => format!("check ssh connectivity to {}", target),
            Action::EnsureRemoteDir { path } => {
                format!("create {} (mode 700) on {}", path, target)
            }
            Action::SyncFiles {
                sources,
                remote_dir,
            } => {
                let files: Vec<String> = sources.iter().map(|p| p.display().to_string()).collect();
                format!(
                    "rsync {} -> {}",
                    files.join(" "),
                    target.remote_spec(remote_dir)
                )
            }
            Action::RegistryLogin {
                registry, username, ..
            } => format!("log in to {} as {} on {}", registry, username, target),
            Action::ComposeValidate(project) => {
                format!("validate {} in {}", project.file, project.dir)
            }
            Action::ComposePull(project) => {
                format!("pull images for {} (IMAGE={})", project.file, project.image)
            }
            Action::ComposeUp(project) => {
                format!(
                    "bring up {} detached with IMAGE={}",
                    project.file, project.image
                )
            }
            Action::ResolveDigest { image } => format!("resolve digest of {}", image),
            Action::AppendLog { log_path, entry } => {
                format!("append to {}: {}", log_path, entry)
            }
            Action::ListServices(project) => format!("list services of {}", project.file),
            Action::HealthProbe { url } => format!("probe {}", url),
        }
    }
}

/// What an executor did with an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Action was performed; carries its stdout
    Completed(String),
    /// Action was only described
    Announced(String),
}

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

pub trait Executor {
    fn mode(&self) -> ExecutionMode;

    fn execute(&mut self, action: &Action) -> Result<Outcome, ExecutionError>;

    /// Route later connections through a key agent
    fn use_agent(&mut self, _agent: &AgentEnv) {}
}
