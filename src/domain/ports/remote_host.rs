//! Remote Host Port
//!
//! Abstracts the machine the stack is deployed to. The pipeline only needs
//! three capabilities: run a shell command, copy files into a directory, and
//! check that the host is reachable.

use std::path::PathBuf;
use thiserror::Error;

use super::trust_provider::AgentEnv;

/// Error from a remote invocation
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The local client program could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The client ran but reported failure
    #[error("{program} exited with {}: {stderr}", describe_code(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Local precondition for a transfer is not met
    #[error("local file not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {}", c),
        None => "signal".to_string(),
    }
}

/// A shell script to run on the remote host, with optional stdin
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    script: String,
    stdin: Option<String>,
}

impl RemoteCommand {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            stdin: None,
        }
    }

    /// Feed `input` to the remote command's stdin instead of its arguments
    pub fn with_stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn stdin(&self) -> Option<&str> {
        self.stdin.as_deref()
    }
}

// stdin may carry credentials
impl std::fmt::Debug for RemoteCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCommand")
            .field("script", &self.script)
            .field("stdin", &self.stdin.as_ref().map(|_| "****"))
            .finish()
    }
}

/// Captured output of a successful remote command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Trait for hosts the stack can be deployed to
pub trait RemoteHost {
    /// Display name, e.g. `user@host`
    fn destination(&self) -> String;

    /// Run a command; non-zero exit is an error
    fn run(&self, command: &RemoteCommand) -> Result<CommandOutput, RemoteError>;

    /// Copy local files and directories into `remote_dir`
    fn copy(&self, sources: &[PathBuf], remote_dir: &str) -> Result<(), RemoteError>;

    /// Open a connection and run a no-op
    fn check_connectivity(&self) -> Result<(), RemoteError> {
        self.run(&RemoteCommand::new("true")).map(|_| ())
    }

    /// Use a key agent for all later connections
    fn use_agent(&mut self, _agent: &AgentEnv) {}
}
