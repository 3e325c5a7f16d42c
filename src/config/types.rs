//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_NAME: &str = "app";
pub const DEFAULT_IMAGE: &str = "ghcr.io/acme/app:staging";
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";
pub const DEFAULT_LOG_FILE: &str = "deploy.log";
pub const DEFAULT_REGISTRY: &str = "ghcr.io";
pub const DEFAULT_HEALTH_URL: &str = "http://localhost/healthz";

/// Application section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Used to derive the default remote directory
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Image deployed when neither `--image` nor `IMAGE` is set
    #[serde(default)]
    pub image: Option<String>,

    /// Remote directory used when neither `--remote-dir` nor `STAGING_REMOTE_DIR` is set
    #[serde(default)]
    pub remote_dir: Option<String>,

    #[serde(default = "default_compose_file")]
    pub compose_file: String,

    /// Local files and directories mirrored to the remote directory
    #[serde(default = "default_sync")]
    pub sync: Vec<PathBuf>,

    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            image: None,
            remote_dir: None,
            compose_file: default_compose_file(),
            sync: default_sync(),
            log_file: default_log_file(),
        }
    }
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_compose_file() -> String {
    DEFAULT_COMPOSE_FILE.to_string()
}

fn default_sync() -> Vec<PathBuf> {
    vec![
        PathBuf::from(DEFAULT_COMPOSE_FILE),
        PathBuf::from("nginx"),
        PathBuf::from(".env.example"),
    ]
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

/// Container registry section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_registry")]
    pub host: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            host: default_registry(),
        }
    }
}

fn default_registry() -> String {
    DEFAULT_REGISTRY.to_string()
}

/// Health probe section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Probed from the remote host itself
    #[serde(default = "default_health_url")]
    pub url: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            url: default_health_url(),
        }
    }
}

fn default_health_url() -> String {
    DEFAULT_HEALTH_URL.to_string()
}

/// Contents of `deploy.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub health: HealthConfig,
}

