//! SSH Remote Host
//!
//! Implements RemoteHost by shelling out to the system `ssh` and `rsync`
//! clients. Every call opens a fresh connection with the same options.

mod options;
mod rsync;

pub use options::SshOptions;
pub use rsync::RsyncTransfer;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{AgentEnv, CommandOutput, RemoteCommand, RemoteError, RemoteHost};
use crate::domain::value_objects::SshTarget;

/// Remote host reached through the system ssh client
pub struct SshHost {
    target: SshTarget,
    options: SshOptions,
    agent: AgentEnv,
    /// Directory sync sources are resolved against
    local_root: PathBuf,
}

impl SshHost {
    pub fn new(target: SshTarget) -> Self {
        Self {
            target,
            options: SshOptions::default(),
            agent: AgentEnv::default(),
            local_root: PathBuf::from("."),
        }
    }

    pub fn with_local_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.local_root = root.into();
        self
    }

    pub fn local_root(&self) -> &Path {
        &self.local_root
    }

    /// Full argument list for running `script`, without the program name
    fn ssh_args(&self, script: &str) -> Vec<String> {
        let mut args = self.options.args();
        args.push(self.target.destination());
        args.push(script.to_string());
        args
    }
}

impl RemoteHost for SshHost {
    fn destination(&self) -> String {
        self.target.destination()
    }

    fn run(&self, command: &RemoteCommand) -> Result<CommandOutput, RemoteError> {
        let input = command.stdin();

        let mut child = Command::new("ssh")
            .args(self.ssh_args(command.script()))
            .envs(self.agent.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RemoteError::Spawn {
                program: "ssh".to_string(),
                source,
            })?;

        if let Some(inp) = input {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(inp.as_bytes())?;
            }
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(RemoteError::Failed {
                program: "ssh".to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    fn copy(&self, sources: &[PathBuf], remote_dir: &str) -> Result<(), RemoteError> {
        RsyncTransfer::new(&self.options, &self.agent).transfer(
            &self.local_root,
            sources,
            &self.target.remote_spec(remote_dir),
        )
    }

    fn use_agent(&mut self, agent: &AgentEnv) {
        self.agent = agent.clone();
    }
}
