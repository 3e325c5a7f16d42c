//! Resolution of the effective deploy configuration
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (positional host/user only when the env is unset)
//! 3. Config file (`deploy.toml`)
//! 4. Built-in defaults

use std::path::PathBuf;

use crate::domain::value_objects::{ComposeProject, Secret, SshTarget};
use crate::error::{DeployError, DeployResult};

use super::types::FileConfig;

pub const ENV_SSH_HOST: &str = "SSH_HOST";
pub const ENV_SSH_USER: &str = "SSH_USER";
pub const ENV_IMAGE: &str = "IMAGE";
pub const ENV_REMOTE_DIR: &str = "STAGING_REMOTE_DIR";
pub const ENV_REGISTRY_USER: &str = "GHCR_USERNAME";
pub const ENV_REGISTRY_TOKEN: &str = "GHCR_PAT";
pub const ENV_INVOKER: &str = "USER";

/// Invoker recorded when `USER` is unset
pub const LOCAL_INVOKER: &str = "local";

/// Values taken from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub dry_run: bool,
    pub remote_dir: Option<String>,
    pub ssh_key_file: Option<PathBuf>,
    pub image: Option<String>,
    pub host: Option<String>,
    pub user: Option<String>,
}

/// Registry login, present only when both halves are set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryCredentials {
    pub username: String,
    pub token: Secret,
}

/// Fully resolved, immutable configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub dry_run: bool,
    pub target: SshTarget,
    pub remote_dir: String,
    pub image: String,
    pub ssh_key: Option<PathBuf>,
    pub registry: Option<RegistryCredentials>,
    pub registry_host: String,
    pub compose_file: String,
    pub sync_files: Vec<PathBuf>,
    pub log_file: String,
    pub health_url: String,
    pub invoker: String,
}

impl DeployConfig {
    /// Resolve from CLI values, an environment lookup and the config file.
    ///
    /// Empty environment values count as unset.
    pub fn resolve(
        cli: &CliOverrides,
        file: &FileConfig,
        get_env: impl Fn(&str) -> Option<String>,
    ) -> DeployResult<Self> {
        let env = |key: &str| get_env(key).filter(|v| !v.is_empty());
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());

        let host = env(ENV_SSH_HOST)
            .or_else(|| non_empty(&cli.host))
            .ok_or(DeployError::MissingTarget {
                what: "ssh host",
                env_var: ENV_SSH_HOST,
            })?;
        let user = env(ENV_SSH_USER)
            .or_else(|| non_empty(&cli.user))
            .ok_or(DeployError::MissingTarget {
                what: "ssh user",
                env_var: ENV_SSH_USER,
            })?;

        let image = non_empty(&cli.image)
            .or_else(|| env(ENV_IMAGE))
            .or_else(|| non_empty(&file.app.image))
            .unwrap_or_else(|| super::types::DEFAULT_IMAGE.to_string());

        let remote_dir = non_empty(&cli.remote_dir)
            .or_else(|| env(ENV_REMOTE_DIR))
            .or_else(|| non_empty(&file.app.remote_dir))
            .unwrap_or_else(|| default_remote_dir(&user, &file.app.name));

        let registry = match (env(ENV_REGISTRY_USER), env(ENV_REGISTRY_TOKEN)) {
            (Some(username), Some(token)) => Some(RegistryCredentials {
                username,
                token: Secret::new(token),
            }),
            _ => None,
        };

        Ok(Self {
            dry_run: cli.dry_run,
            target: SshTarget::new(host, user),
            remote_dir,
            image,
            ssh_key: cli.ssh_key_file.clone(),
            registry,
            registry_host: file.registry.host.clone(),
            compose_file: file.app.compose_file.clone(),
            sync_files: file.app.sync.clone(),
            log_file: file.app.log_file.clone(),
            health_url: file.health.url.clone(),
            invoker: env(ENV_INVOKER).unwrap_or_else(|| LOCAL_INVOKER.to_string()),
        })
    }

    pub fn compose_project(&self) -> ComposeProject {
        ComposeProject::new(&self.remote_dir, &self.compose_file, &self.image)
    }

    /// Absolute path of the deploy log on the remote host
    pub fn log_path(&self) -> String {
        format!("{}/{}", self.remote_dir.trim_end_matches('/'), self.log_file)
    }
}

/// `/home/<user>/deploy/<app>`
pub fn default_remote_dir(user: &str, app: &str) -> String {
    format!("/home/{}/deploy/{}", user, app)
}
