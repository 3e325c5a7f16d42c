//! ssh-agent session handling

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{AgentEnv, TrustError};

const AGENT_VARS: &[&str] = &["SSH_AUTH_SOCK", "SSH_AGENT_PID"];

/// Parse the Bourne-shell output of `ssh-agent -s`:
///
/// ```text
/// SSH_AUTH_SOCK=/tmp/ssh-XXXX/agent.123; export SSH_AUTH_SOCK;
/// SSH_AGENT_PID=124; export SSH_AGENT_PID;
/// echo Agent pid 124;
/// ```
pub fn parse_agent_output(output: &str) -> Option<AgentEnv> {
    let mut vars = Vec::new();

    for statement in output.split([';', '\n']) {
        let Some((key, value)) = statement.trim().split_once('=') else {
            continue;
        };
        if AGENT_VARS.contains(&key) && !value.is_empty() {
            vars.push((key.to_string(), value.to_string()));
        }
    }

    if AGENT_VARS
        .iter()
        .all(|k| vars.iter().any(|(key, _)| key == k))
    {
        Some(AgentEnv { vars })
    } else {
        None
    }
}

/// Start a new agent and return its environment
pub fn start_agent() -> Result<AgentEnv, TrustError> {
    let output = Command::new("ssh-agent")
        .arg("-s")
        .stdin(Stdio::null())
        .output()
        .map_err(|source| TrustError::Spawn {
            program: "ssh-agent".to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(TrustError::Failed {
            program: "ssh-agent".to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    parse_agent_output(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
        TrustError::Failed {
            program: "ssh-agent".to_string(),
            message: "could not parse agent environment".to_string(),
        }
    })
}

/// Add `key` to the agent described by `agent`
pub fn add_key(agent: &AgentEnv, key: &Path) -> Result<(), TrustError> {
    // Passphrase prompts go to the terminal, so stdin stays attached.
    let output = Command::new("ssh-add")
        .arg(key)
        .envs(agent.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::inherit())
        .output()
        .map_err(|source| TrustError::Spawn {
            program: "ssh-add".to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(TrustError::Failed {
            program: "ssh-add".to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

/// Stop the agent. Errors are ignored; the agent may already be gone.
pub fn stop_agent(agent: &AgentEnv) {
    let _ = Command::new("ssh-agent")
        .arg("-k")
        .envs(agent.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
}
