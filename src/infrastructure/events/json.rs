//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of a single event
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            destination,
            remote_dir,
            image,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "destination": destination,
            "remote_dir": remote_dir,
            "image": image,
            "dry_run": dry_run,
        }),

        DeployEvent::StepStarted { step } => serde_json::json!({
            "event": "step_start",
            "step": step.id(),
        }),

        DeployEvent::StepCompleted { step, detail } => serde_json::json!({
            "event": "step_done",
            "step": step.id(),
            "detail": detail,
        }),

        DeployEvent::StepAnnounced { step, intent } => serde_json::json!({
            "event": "step_planned",
            "step": step.id(),
            "intent": intent,
        }),

        DeployEvent::StepDegraded { step, reason } => serde_json::json!({
            "event": "step_degraded",
            "step": step.id(),
            "reason": reason,
        }),

        DeployEvent::StepSkipped { step, reason } => serde_json::json!({
            "event": "step_skipped",
            "step": step.id(),
            "reason": reason,
        }),

        DeployEvent::StepFailed { step, error } => serde_json::json!({
            "event": "step_failed",
            "step": step.id(),
            "error": error,
        }),

        DeployEvent::Command { step, script } => serde_json::json!({
            "event": "command",
            "step": step.id(),
            "script": script,
        }),

        DeployEvent::Completed {
            digest,
            health,
            dry_run,
        } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "digest": digest,
            "health": health.as_str(),
            "dry_run": dry_run,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{HealthStatus, Step};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_event() {
        let buf = SharedBuf::default();
        let sink = JsonEventSink::with_writer(buf.clone());

        sink.on_event(DeployEvent::StepStarted {
            step: Step::ComposeUp,
        });
        sink.on_event(DeployEvent::Completed {
            digest: "unknown".to_string(),
            health: HealthStatus::Healthy,
            dry_run: false,
        });

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "step_start");
        assert_eq!(first["step"], "compose-up");

        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["event"], "complete");
        assert_eq!(last["health"], "healthy");
        assert_eq!(last["digest"], "unknown");
    }

    #[test]
    fn degraded_event_carries_reason() {
        let json = event_to_json(&DeployEvent::StepDegraded {
            step: Step::Digest,
            reason: "no such image".to_string(),
        });
        assert_eq!(json["event"], "step_degraded");
        assert_eq!(json["step"], "digest");
        assert_eq!(json["reason"], "no such image");
    }
}
