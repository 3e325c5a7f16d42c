//! Remote shell scripts for pipeline actions
//!
//! Every value interpolated into a script goes through [`shell_quote`];
//! remote paths go through [`quote_remote_path`] so a leading `~` still
//! resolves to the remote home directory.

use crate::domain::ports::{Action, RemoteCommand};
use crate::domain::value_objects::ComposeProject;

/// Printed by the health probe script when no probe tool is installed
pub const PROBE_TOOL_MISSING: &str = "__probe_tool_missing__";

/// Quote a string for safe use in POSIX shell commands
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Quote a remote path, expanding a leading `~` or `~/` to `"$HOME"`
pub fn quote_remote_path(path: &str) -> String {
    if path == "~" {
        "\"$HOME\"".to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("\"$HOME\"/{}", shell_quote(rest))
    } else {
        shell_quote(path)
    }
}

fn compose(project: &ComposeProject, subcommand: &str) -> String {
    format!(
        "cd {} && IMAGE={} docker compose -f {} {}",
        quote_remote_path(&project.dir),
        shell_quote(&project.image),
        shell_quote(&project.file),
        subcommand
    )
}

/// Remote command for `action`, or `None` when the action is a file transfer
pub fn render(action: &Action) -> Option<RemoteCommand> {
    let cmd = match action {
        Action::CheckConnectivity => RemoteCommand::new("true"),
        Action::EnsureRemoteDir { path } => {
            let p = quote_remote_path(path);
            RemoteCommand::new(format!("mkdir -p {} && chmod 700 {}", p, p))
        }
        Action::SyncFiles { .. } => return None,
        Action::RegistryLogin {
            registry,
            username,
            token,
        } => RemoteCommand::new(format!(
            "docker login {} -u {} --password-stdin",
            shell_quote(registry),
            shell_quote(username)
        ))
        .with_stdin(token.expose()),
        Action::ComposeValidate(project) => RemoteCommand::new(compose(project, "config -q")),
        Action::ComposePull(project) => RemoteCommand::new(compose(project, "pull")),
        Action::ComposeUp(project) => RemoteCommand::new(compose(project, "up -d")),
        Action::ListServices(project) => RemoteCommand::new(compose(project, "ps")),
        Action::ResolveDigest { image } => RemoteCommand::new(format!(
            "docker image inspect --format {} {}",
            shell_quote("{{index .RepoDigests 0}}"),
            shell_quote(image)
        )),
        Action::AppendLog { log_path, entry } => {
            let dir = log_path
                .rsplit_once('/')
                .map(|(d, _)| d)
                .filter(|d| !d.is_empty())
                .unwrap_or(".");
            RemoteCommand::new(format!(
                "mkdir -p {} && printf '%s\\n' {} >> {}",
                quote_remote_path(dir),
                shell_quote(&entry.line()),
                quote_remote_path(log_path)
            ))
        }
        Action::HealthProbe { url } => RemoteCommand::new(format!(
            "if command -v curl >/dev/null 2>&1; then curl -fsS --max-time 10 {}; else echo {}; fi",
            shell_quote(url),
            PROBE_TOOL_MISSING
        )),
    };
    Some(cmd)
}
