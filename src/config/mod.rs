//! Configuration module for remote-deploy
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SSH_HOST, IMAGE, STAGING_REMOTE_DIR, ...)
//! 3. Positional host/user (only when the env var is unset)
//! 4. Config file (deploy.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod resolve;
mod types;

pub use loader::{
    discover, explicit_path, load_with_warnings, ConfigWarning, CONFIG_FILE_NAME, ENV_CONFIG,
};
pub use resolve::{
    default_remote_dir, CliOverrides, DeployConfig, RegistryCredentials, ENV_IMAGE,
    ENV_INVOKER, ENV_REGISTRY_TOKEN, ENV_REGISTRY_USER, ENV_REMOTE_DIR, ENV_SSH_HOST,
    ENV_SSH_USER, LOCAL_INVOKER,
};
pub use types::{
    AppConfig, FileConfig, HealthConfig, RegistryConfig, DEFAULT_APP_NAME, DEFAULT_COMPOSE_FILE,
    DEFAULT_HEALTH_URL, DEFAULT_IMAGE, DEFAULT_LOG_FILE, DEFAULT_REGISTRY,
};
