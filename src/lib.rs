//! remote-deploy - ship a compose stack to a remote host over SSH
//!
//! Resolves configuration from flags, environment and `deploy.toml`, sets up
//! ssh trust, syncs the stack files, logs in to the registry, drives
//! `docker compose` on the remote host, appends a deploy log line and probes
//! the health endpoint. Dry-run mode describes every step instead.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DeployReport, DeployUseCase, DryRunExecutor, LiveExecutor};
pub use config::{CliOverrides, DeployConfig, FileConfig};
pub use error::{DeployError, DeployResult};
pub use infrastructure::{JsonEventSink, SshHost, SystemTrust};
