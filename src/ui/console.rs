//! Console Event Sink
//!
//! Human-readable progress lines for interactive and CI terminals.

use std::cell::RefCell;
use std::io::{self, Write};

use crossterm::style::Stylize;

use remote_deploy::domain::ports::{DeployEvent, DeployEventSink};
use remote_deploy::domain::value_objects::{HealthStatus, Step};

use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme;

pub struct ConsoleEventSink {
    out: RefCell<Box<dyn Write>>,
    color: bool,
    unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn stdout(caps: TerminalCapabilities, verbose: u8) -> Self {
        Self::with_writer(io::stdout(), caps.supports_color, caps.supports_unicode, verbose)
    }

    pub fn with_writer<W: Write + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        verbose: u8,
    ) -> Self {
        Self {
            out: RefCell::new(Box::new(writer)),
            color,
            unicode,
            verbose,
        }
    }

    fn line(&self, text: String) {
        let mut out = self.out.borrow_mut();
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.with(theme::colors::DIM))
        } else {
            text.to_string()
        }
    }

    fn step_done(&self, step: Step, detail: Option<&str>) {
        let icon = self.icon(Icon::Success);
        match detail {
            Some(d) if step == Step::Services || d.contains('\n') => {
                self.line(format!("  {} {}", icon, step));
                for l in d.lines() {
                    self.line(format!("      {}", self.dim(l)));
                }
            }
            Some(d) => self.line(format!("  {} {}: {}", icon, step, d)),
            None => self.line(format!("  {} {}", icon, step)),
        }
    }

    fn finished(&self, digest: &str, health: &HealthStatus, dry_run: bool) {
        if dry_run {
            self.line(format!(
                "\n{} Dry run complete. No remote changes were made.",
                self.icon(Icon::Success)
            ));
            return;
        }

        let health = match health {
            HealthStatus::Healthy => "healthy".to_string(),
            HealthStatus::Skipped(reason) => format!("skipped ({})", reason),
            HealthStatus::Failed(_) => "failed".to_string(),
        };
        self.line(format!(
            "\n{} Deploy complete. digest: {}, health: {}",
            self.icon(Icon::Success),
            digest,
            health
        ));
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                destination,
                remote_dir,
                image,
                dry_run,
            } => {
                let suffix = if dry_run { " (dry-run)" } else { "" };
                self.line(format!(
                    "{} Deploying {} to {}:{}{}",
                    self.icon(Icon::Deploy),
                    image,
                    destination,
                    remote_dir,
                    suffix
                ));
            }
            DeployEvent::StepStarted { .. } => {}
            DeployEvent::StepCompleted { step, detail } => self.step_done(step, detail.as_deref()),
            DeployEvent::StepAnnounced { intent, .. } => {
                self.line(format!(
                    "  {} [dry-run] would {}",
                    self.icon(Icon::Planned),
                    intent
                ));
            }
            DeployEvent::StepDegraded { step, reason } => {
                self.line(format!("  {} {}: {}", self.icon(Icon::Warning), step, reason));
            }
            DeployEvent::StepSkipped { step, reason } => {
                self.line(format!("  {} {}: {}", self.icon(Icon::Skipped), step, reason));
            }
            DeployEvent::StepFailed { step, .. } => {
                self.line(format!("  {} {}", self.icon(Icon::Error), step));
            }
            DeployEvent::Command { script, .. } => {
                if self.verbose > 0 {
                    self.line(format!("      {}", self.dim(&format!("$ {}", script))));
                }
            }
            DeployEvent::Completed {
                digest,
                health,
                dry_run,
            } => self.finished(&digest, &health, dry_run),
        }
    }
}
