//! known_hosts maintenance

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::TrustError;

/// `~/.ssh/known_hosts`
pub fn default_known_hosts() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh").join("known_hosts"))
}

/// Whether `host` already has an entry (hashed or plain) in `file`
pub fn is_known(file: &Path, host: &str) -> bool {
    if !file.exists() {
        return false;
    }

    Command::new("ssh-keygen")
        .arg("-F")
        .arg(host)
        .arg("-f")
        .arg(file)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Scan `host` and append its hashed keys to `file`
pub fn scan_and_append(file: &Path, host: &str) -> Result<(), TrustError> {
    let output = Command::new("ssh-keyscan")
        .arg("-H")
        .arg(host)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| TrustError::Spawn {
            program: "ssh-keyscan".to_string(),
            source,
        })?;

    let keys = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() || keys.trim().is_empty() {
        return Err(TrustError::Failed {
            program: "ssh-keyscan".to_string(),
            message: format!("no host keys returned for {}", host),
        });
    }

    if let Some(parent) = file.parent() {
        ensure_private_dir(parent)?;
    }

    let mut out = OpenOptions::new().create(true).append(true).open(file)?;
    out.write_all(keys.as_bytes())?;
    if !keys.ends_with('\n') {
        writeln!(out)?;
    }

    Ok(())
}

fn ensure_private_dir(dir: &Path) -> Result<(), TrustError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_known() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_known(&dir.path().join("known_hosts"), "example.com"));
    }

    #[cfg(unix)]
    #[test]
    fn private_dir_is_mode_700() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let ssh = dir.path().join(".ssh");
        ensure_private_dir(&ssh).unwrap();

        let mode = fs::metadata(&ssh).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
