//! Error types for remote-deploy
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ExecutionError, TrustError};
use crate::domain::value_objects::Step;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Host or user could not be resolved from flags, env or positionals
    #[error("missing {what}: pass it as an argument or set {env_var}")]
    MissingTarget {
        what: &'static str,
        env_var: &'static str,
    },

    /// Config file could not be read or parsed
    #[error("invalid config {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// A fatal pipeline step failed
    #[error("{step} failed: {source}")]
    Step {
        step: Step,
        #[source]
        source: ExecutionError,
    },

    /// Loading the ssh identity into the agent failed
    #[error("could not load ssh key {}: {source}", .key.display())]
    Identity {
        key: PathBuf,
        #[source]
        source: TrustError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Configuration problems are reported before any remote action
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DeployError::MissingTarget { .. } | DeployError::InvalidConfig { .. }
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }
}
