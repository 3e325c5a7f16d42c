//! Configuration file discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::types::FileConfig;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "deploy.toml";

/// Environment variable naming an explicit config file
pub const ENV_CONFIG: &str = "DEPLOY_CONFIG";

/// Explicit config path: the `--config` flag, then `DEPLOY_CONFIG`.
pub fn explicit_path(
    flag: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        get_env(ENV_CONFIG)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(FileConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DeployError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: FileConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Locate and load the config file.
///
/// An explicit path (flag or `DEPLOY_CONFIG`) must exist; the implicit
/// `./deploy.toml` is optional and defaults apply without it.
pub fn discover(
    explicit: Option<&Path>,
    cwd: &Path,
) -> DeployResult<(FileConfig, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    let implicit = cwd.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        return load_with_warnings(&implicit);
    }

    Ok((FileConfig::default(), Vec::new()))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "app",
        "name",
        "image",
        "remote_dir",
        "compose_file",
        "sync",
        "log_file",
        "registry",
        "host",
        "health",
        "url",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
