use remote_deploy::config::ConfigWarning;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::terminal::detect_capabilities;

pub fn print_config_warnings(warnings: &[ConfigWarning], json: bool) {
    if warnings.is_empty() {
        return;
    }
    let annotate = !json && detect_capabilities().is_ci && std::env::var("GITHUB_ACTIONS").is_ok();

    for w in warnings {
        let path = w.file.display();
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path, line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path);
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }

        if annotate {
            let file = w.file.to_string_lossy();
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &format!("Unknown config key '{}'", w.key),
                    Some(&file),
                    w.line,
                    Some("remote-deploy"),
                )
            );
        }
    }
}
