use std::io::Write;

use crossterm::style::Stylize;

use remote_deploy::domain::value_objects::Step;
use remote_deploy::DeployError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::theme;

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool) -> String {
    let tag = if supports_color {
        format!("{}", "[ERROR]".with(theme::colors::ERROR))
    } else {
        "[ERROR]".to_string()
    };

    let mut out = format!("{} {}\n", tag, err);
    if let Some(hint) = err.downcast_ref::<DeployError>().and_then(hint_for) {
        out.push_str(&format!("  {}\n", hint));
    }
    out
}

fn hint_for(err: &DeployError) -> Option<&'static str> {
    match err {
        DeployError::Identity { .. } => {
            Some("Check that the key exists and is not passphrase protected.")
        }
        DeployError::Step {
            step: Step::Connectivity,
            ..
        } => {
            Some("Check that the host is reachable and its key is in ~/.ssh/known_hosts.")
        }
        _ => None,
    }
}

/// NDJSON `error` event; `usage` is attached for configuration errors
fn error_event(err: &anyhow::Error, usage: Option<&str>) -> serde_json::Value {
    let mut event = serde_json::json!({
        "event": "error",
        "message": err.to_string(),
    });
    if let Some(DeployError::Step { step, .. }) = err.downcast_ref::<DeployError>() {
        event["step"] = serde_json::json!(step.id());
    }
    if let Some(usage) = usage {
        event["usage"] = serde_json::json!(usage.trim_end());
    }
    event
}

/// Report a fatal error on stdout (`--json`) or stderr, followed by `usage`
pub fn print_error(err: &anyhow::Error, json: bool, usage: Option<&str>) {
    if json {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", error_event(err, usage));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        let file = match err.downcast_ref::<DeployError>() {
            Some(DeployError::InvalidConfig { file, .. }) => {
                Some(file.to_string_lossy().to_string())
            }
            _ => None,
        };
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                None,
                Some("remote-deploy"),
            )
        );
    }

    eprint!("{}", format_error(err));
    if let Some(usage) = usage {
        eprintln!("\n{}", usage.trim_end());
    }
}
