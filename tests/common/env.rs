//! Test environment builder for isolated remote-deploy runs.
//!
//! Every run gets its own project directory, HOME and a `bin/` directory of
//! fake `ssh`, `rsync`, `ssh-keyscan`, `ssh-keygen`, `ssh-agent` and
//! `ssh-add` scripts placed first on PATH. Each fake appends its arguments to
//! `calls.log` so tests can assert on what would have reached the network.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use super::fixtures::{COMPOSE_FILE, ENV_EXAMPLE, NGINX_CONF};

/// Variables the binary reads; scrubbed from the inherited environment
const SCRUBBED_ENV: &[&str] = &[
    "SSH_HOST",
    "SSH_USER",
    "IMAGE",
    "STAGING_REMOTE_DIR",
    "GHCR_USERNAME",
    "GHCR_PAT",
    "DEPLOY_CONFIG",
    "USER",
    "SSH_AUTH_SOCK",
    "SSH_AGENT_PID",
    "GITHUB_ACTIONS",
    "CI",
    "FAKE_SSH_FAIL",
    "FAKE_DIGEST",
];

/// Result of running the remote-deploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory the binary runs in
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    /// Fake tools and their call log
    tools_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            tools_dir: TempDir::new().expect("Failed to create tools dir"),
        };
        env.install_fake_tools();
        env
    }

    /// Environment with docker-compose.yml, nginx/ and .env.example present
    pub fn with_stack() -> Self {
        let env = Self::new();
        env.write_project_file("docker-compose.yml", COMPOSE_FILE);
        env.write_project_file("nginx/default.conf", NGINX_CONF);
        env.write_project_file(".env.example", ENV_EXAMPLE);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write a file under the fake home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        let full_path = self.home_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run remote-deploy in the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run remote-deploy in the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path = format!(
            "{}:{}",
            self.bin_dir().display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_remote-deploy"));
        cmd.current_dir(self.project_root.path()).args(args);
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("HOME", self.home_dir.path())
            .env("PATH", path)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute remote-deploy");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Every fake tool invocation so far, one per line
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Remote scripts passed to the fake ssh, in order
    pub fn ssh_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|l| l.starts_with("ssh "))
            .collect()
    }

    /// Index of the first call containing `needle`
    pub fn call_index(&self, needle: &str) -> Option<usize> {
        self.calls().iter().position(|l| l.contains(needle))
    }

    fn bin_dir(&self) -> PathBuf {
        self.tools_dir.path().join("bin")
    }

    fn log_path(&self) -> PathBuf {
        self.tools_dir.path().join("calls.log")
    }

    fn install_fake_tools(&self) {
        let bin = self.bin_dir();
        std::fs::create_dir_all(&bin).expect("Failed to create bin dir");
        let log = self.log_path();
        let log = log.display();

        write_tool(
            &bin,
            "ssh",
            &format!(
                r#"printf '%s\n' "ssh $*" >> "{log}"
if [ -n "${{SSH_AUTH_SOCK:-}}" ]; then
  printf '%s\n' "ssh-env $SSH_AUTH_SOCK" >> "{log}"
fi
for script; do :; done
case "$script" in
  *--password-stdin*) printf '%s\n' "stdin $(cat)" >> "{log}" ;;
esac
if [ -n "${{FAKE_SSH_FAIL:-}}" ]; then
  case "$script" in
    *"$FAKE_SSH_FAIL"*) echo "fake failure for $FAKE_SSH_FAIL" >&2; exit 1 ;;
  esac
fi
case "$script" in
  *"image inspect"*)
    if [ -n "${{FAKE_DIGEST:-}}" ]; then
      echo "$FAKE_DIGEST"
    else
      echo "Error: No such image" >&2
      exit 1
    fi
    ;;
  *" ps") printf 'NAME  STATUS\nweb   Up 2 seconds\n' ;;
  *"command -v curl"*) echo ok ;;
esac
exit 0
"#
            ),
        );
        write_tool(
            &bin,
            "rsync",
            &format!(
                r#"printf '%s\n' "rsync $*" >> "{log}"
exit 0
"#
            ),
        );
        write_tool(
            &bin,
            "ssh-keyscan",
            &format!(
                r#"printf '%s\n' "ssh-keyscan $*" >> "{log}"
for host; do :; done
echo "$host ssh-ed25519 AAAAC3NzaFAKE"
exit 0
"#
            ),
        );
        write_tool(
            &bin,
            "ssh-keygen",
            &format!(
                r#"printf '%s\n' "ssh-keygen $*" >> "{log}"
host=""
file=""
while [ $# -gt 0 ]; do
  case "$1" in
    -F) host="$2"; shift 2 ;;
    -f) file="$2"; shift 2 ;;
    *) shift ;;
  esac
done
[ -n "$host" ] && [ -f "$file" ] && grep -q "^$host " "$file"
"#
            ),
        );
        write_tool(
            &bin,
            "ssh-agent",
            &format!(
                r#"printf '%s\n' "ssh-agent $*" >> "{log}"
if [ "${{1-}}" = "-s" ]; then
  echo "SSH_AUTH_SOCK=/tmp/fake-agent.sock; export SSH_AUTH_SOCK;"
  echo "SSH_AGENT_PID=4242; export SSH_AGENT_PID;"
  echo "echo Agent pid 4242;"
fi
exit 0
"#
            ),
        );
        write_tool(
            &bin,
            "ssh-add",
            &format!(
                r#"printf '%s\n' "ssh-add $* sock=${{SSH_AUTH_SOCK:-none}}" >> "{log}"
exit 0
"#
            ),
        );
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_tool(bin: &Path, name: &str, body: &str) {
    let path = bin.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}", body)).expect("Failed to write fake tool");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake tool");
    }
}
