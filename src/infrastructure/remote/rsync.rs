//! Rsync transfer
//!
//! Mirrors local files into a remote directory with an archive-preserving,
//! compressed transfer over the same ssh options as every other call.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{AgentEnv, RemoteError};

use super::options::SshOptions;

/// Transfer strategy using rsync
pub struct RsyncTransfer<'a> {
    options: &'a SshOptions,
    agent: &'a AgentEnv,
}

impl<'a> RsyncTransfer<'a> {
    pub fn new(options: &'a SshOptions, agent: &'a AgentEnv) -> Self {
        Self { options, agent }
    }

    /// Arguments passed to rsync, without the program name
    pub fn args(&self, sources: &[PathBuf], remote_spec: &str) -> Vec<String> {
        let mut args = vec!["-az".to_string(), "-e".to_string(), self.options.rsh()];
        args.extend(sources.iter().map(|s| s.display().to_string()));
        args.push(remote_spec.to_string());
        args
    }

    /// Copy `sources` (relative to `local_root`) to `remote_spec` (`user@host:dir/`)
    pub fn transfer(
        &self,
        local_root: &Path,
        sources: &[PathBuf],
        remote_spec: &str,
    ) -> Result<(), RemoteError> {
        for source in sources {
            if !local_root.join(source).exists() {
                return Err(RemoteError::MissingSource(source.clone()));
            }
        }

        let output = Command::new("rsync")
            .args(self.args(sources, remote_spec))
            .current_dir(local_root)
            .envs(self.agent.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RemoteError::Spawn {
                program: "rsync".to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(RemoteError::Failed {
                program: "rsync".to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
