use std::path::PathBuf;

use clap::Parser;

use remote_deploy::config::CliOverrides;

/// remote-deploy - ship a compose stack to a remote host over SSH
#[derive(Parser, Debug)]
#[command(name = "remote-deploy")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "HOST and USER fall back to SSH_HOST and SSH_USER; the environment wins when set."
)]
pub struct Cli {
    /// Describe every step without touching the remote host
    #[arg(long)]
    pub dry_run: bool,

    /// Remote directory to deploy into (default: /home/<user>/deploy/<app>)
    #[arg(long, value_name = "DIR")]
    pub remote_dir: Option<String>,

    /// Private key to load into a fresh ssh-agent
    #[arg(long, value_name = "FILE")]
    pub ssh_key_file: Option<PathBuf>,

    /// Image reference exported as IMAGE to docker compose
    #[arg(long, value_name = "IMAGE")]
    pub image: Option<String>,

    /// Config file (default: ./deploy.toml, or DEPLOY_CONFIG)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v echoes remote commands)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Remote host
    pub host: Option<String>,

    /// Remote user
    pub user: Option<String>,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dry_run: self.dry_run,
            remote_dir: self.remote_dir.clone(),
            ssh_key_file: self.ssh_key_file.clone(),
            image: self.image.clone(),
            host: self.host.clone(),
            user: self.user.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parse_positionals() {
        let cli = Cli::try_parse_from(["remote-deploy", "host1", "alice"]).unwrap();
        assert_eq!(cli.host.as_deref(), Some("host1"));
        assert_eq!(cli.user.as_deref(), Some("alice"));
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["remote-deploy"]).unwrap();
        assert!(cli.host.is_none());
        assert!(cli.user.is_none());
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::try_parse_from([
            "remote-deploy",
            "--dry-run",
            "--remote-dir",
            "/srv/app",
            "--ssh-key-file",
            "/keys/id",
            "--image",
            "img:2",
            "-vv",
            "h",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.remote_dir.as_deref(), Some("/srv/app"));
        assert_eq!(cli.ssh_key_file, Some(PathBuf::from("/keys/id")));
        assert_eq!(cli.image.as_deref(), Some("img:2"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.host.as_deref(), Some("h"));
        assert!(cli.user.is_none());
    }

    #[test]
    fn test_cli_overrides_carry_flags() {
        let cli = Cli::try_parse_from(["remote-deploy", "--dry-run", "--image", "x", "h", "u"])
            .unwrap();
        let o = cli.overrides();
        assert!(o.dry_run);
        assert_eq!(o.image.as_deref(), Some("x"));
        assert_eq!(o.host.as_deref(), Some("h"));
        assert_eq!(o.user.as_deref(), Some("u"));
        assert!(o.remote_dir.is_none());
    }

    #[test]
    fn test_cli_help_is_reported_as_error_kind() {
        let err = Cli::try_parse_from(["remote-deploy", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_rejects_third_positional() {
        assert!(Cli::try_parse_from(["remote-deploy", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["remote-deploy", "--force"]).is_err());
    }
}
