//! System Trust Provider
//!
//! Implements TrustProvider with the OpenSSH tools on PATH:
//! `ssh-keygen -F` / `ssh-keyscan -H` for known hosts, and
//! `ssh-agent` / `ssh-add` for identities.

mod agent;
mod known_hosts;

pub use agent::parse_agent_output;
pub use known_hosts::default_known_hosts;

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::ports::{AgentEnv, TrustError, TrustProvider};

pub struct SystemTrust {
    known_hosts: Option<PathBuf>,
    /// Agent started by this provider, stopped on drop
    agent: RefCell<Option<AgentEnv>>,
}

impl SystemTrust {
    /// Use `~/.ssh/known_hosts`
    pub fn new() -> Self {
        Self::with_known_hosts(default_known_hosts())
    }

    pub fn with_known_hosts(known_hosts: Option<PathBuf>) -> Self {
        Self {
            known_hosts,
            agent: RefCell::new(None),
        }
    }
}

impl Default for SystemTrust {
    fn default() -> Self {
        Self::new()
    }
}

impl TrustProvider for SystemTrust {
    fn ensure_known_host(&self, host: &str) -> Result<(), TrustError> {
        let file = self.known_hosts.as_deref().ok_or(TrustError::NoHome)?;
        if known_hosts::is_known(file, host) {
            return Ok(());
        }
        known_hosts::scan_and_append(file, host)
    }

    fn load_identity(&self, key: &Path) -> Result<AgentEnv, TrustError> {
        let env = match self.agent.borrow().clone() {
            Some(env) => env,
            None => agent::start_agent()?,
        };
        *self.agent.borrow_mut() = Some(env.clone());

        agent::add_key(&env, key)?;
        Ok(env)
    }
}

impl Drop for SystemTrust {
    fn drop(&mut self) {
        if let Some(env) = self.agent.get_mut().take() {
            agent::stop_agent(&env);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_home_is_an_error() {
        let trust = SystemTrust::with_known_hosts(None);
        let err = trust.ensure_known_host("example.com").unwrap_err();
        assert!(matches!(err, TrustError::NoHome));
    }
}
