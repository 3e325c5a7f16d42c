//! Trust Provider Port
//!
//! Local ssh trust setup: the known-hosts store and the key agent.

use std::path::Path;
use thiserror::Error;

/// Error from local trust setup
#[derive(Error, Debug)]
pub enum TrustError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed: {message}")]
    Failed { program: String, message: String },

    #[error("cannot locate home directory for known_hosts")]
    NoHome,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Environment that routes ssh clients to a running key agent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentEnv {
    pub vars: Vec<(String, String)>,
}

impl AgentEnv {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

pub trait TrustProvider {
    /// Make sure `host` is in the known-hosts store. Idempotent.
    fn ensure_known_host(&self, host: &str) -> Result<(), TrustError>;

    /// Start a key agent and add `key` to it
    fn load_identity(&self, key: &Path) -> Result<AgentEnv, TrustError>;
}

impl<T: TrustProvider + ?Sized> TrustProvider for &T {
    fn ensure_known_host(&self, host: &str) -> Result<(), TrustError> {
        (**self).ensure_known_host(host)
    }

    fn load_identity(&self, key: &Path) -> Result<AgentEnv, TrustError> {
        (**self).load_identity(key)
    }
}
