//! Executors for pipeline actions
//!
//! - `LiveExecutor` performs actions against a [`RemoteHost`]
//! - `DryRunExecutor` only describes them and keeps a journal

use crate::domain::ports::{
    Action, AgentEnv, ExecutionError, ExecutionMode, Executor, Outcome, RemoteHost,
};
use crate::domain::services::render;
use crate::domain::value_objects::SshTarget;

/// Performs every action on the remote host
pub struct LiveExecutor<H: RemoteHost> {
    host: H,
}

impl<H: RemoteHost> LiveExecutor<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: RemoteHost> Executor for LiveExecutor<H> {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Live
    }

    fn execute(&mut self, action: &Action) -> Result<Outcome, ExecutionError> {
        match action {
            Action::CheckConnectivity => {
                self.host.check_connectivity()?;
                Ok(Outcome::Completed(String::new()))
            }
            Action::SyncFiles {
                sources,
                remote_dir,
            } => {
                self.host.copy(sources, remote_dir)?;
                Ok(Outcome::Completed(String::new()))
            }
            other => match render(other) {
                Some(cmd) => {
                    let output = self.host.run(&cmd)?;
                    Ok(Outcome::Completed(output.stdout))
                }
                None => Ok(Outcome::Completed(String::new())),
            },
        }
    }

    fn use_agent(&mut self, agent: &AgentEnv) {
        self.host.use_agent(agent);
    }
}

/// Describes every action instead of performing it
pub struct DryRunExecutor {
    target: SshTarget,
    journal: Vec<String>,
}

impl DryRunExecutor {
    pub fn new(target: SshTarget) -> Self {
        Self {
            target,
            journal: Vec::new(),
        }
    }

    /// Intents announced so far, in order
    pub fn journal(&self) -> &[String] {
        &self.journal
    }
}

impl Executor for DryRunExecutor {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::DryRun
    }

    fn execute(&mut self, action: &Action) -> Result<Outcome, ExecutionError> {
        let intent = action.describe(&self.target);
        self.journal.push(intent.clone());
        Ok(Outcome::Announced(intent))
    }
}
