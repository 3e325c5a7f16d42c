//! remote-deploy CLI
//!
//! Usage: remote-deploy [OPTIONS] [HOST] [USER]
//!
//! Exit codes: 0 success (including dry-run), 1 failed step or `--help`,
//! 2 configuration or usage error.

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use remote_deploy::application::{DeployUseCase, DryRunExecutor, LiveExecutor};
use remote_deploy::config::{discover, explicit_path, DeployConfig};
use remote_deploy::domain::ports::DeployEventSink;
use remote_deploy::{DeployError, JsonEventSink, SshHost, SystemTrust};

mod cli;
mod ui;

use cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayVersion => 0,
                ErrorKind::DisplayHelp => 1,
                _ => 2,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    let json = cli.json;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let deploy_err = err.downcast_ref::<DeployError>();
            let usage = deploy_err
                .filter(|e| e.is_config_error())
                .map(|_| Cli::command().render_usage().to_string());
            ui::error::print_error(&err, json, usage.as_deref());
            ExitCode::from(deploy_err.map_or(1, DeployError::exit_code))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let get_env = |key: &str| std::env::var(key).ok();

    let config_path = explicit_path(cli.config.as_deref(), get_env);
    let (file, warnings) = discover(config_path.as_deref(), &cwd)?;
    ui::output::print_config_warnings(&warnings, cli.json);

    let config = DeployConfig::resolve(&cli.overrides(), &file, get_env)?;

    let sink: Box<dyn DeployEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        let caps = ui::terminal::detect_capabilities();
        Box::new(ui::console::ConsoleEventSink::stdout(caps, cli.verbose))
    };

    let trust = SystemTrust::new();
    if config.dry_run {
        let executor = DryRunExecutor::new(config.target.clone());
        DeployUseCase::new(&config, trust, executor).execute_with_events(sink.as_ref())?;
    } else {
        let host = SshHost::new(config.target.clone()).with_local_root(cwd);
        let executor = LiveExecutor::new(host);
        DeployUseCase::new(&config, trust, executor).execute_with_events(sink.as_ref())?;
    }

    Ok(())
}
