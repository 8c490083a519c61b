//! JSON Event Sink
//!
//! Outputs audit events as NDJSON for CI/automation consumption.

use crate::domain::ports::{AuditEvent, AuditEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
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

impl AuditEventSink for JsonEventSink {
    fn on_event(&self, event: &AuditEvent) {
        match event {
            AuditEvent::RunStarted {
                check_count,
                source,
            } => self.write_event(serde_json::json!({
                "event": "start",
                "command": "run",
                "source": source.as_ref().map(|p| p.display().to_string()),
                "check_count": check_count,
            })),

            AuditEvent::CheckEvaluated {
                ordinal,
                description,
                result,
            } => self.write_event(serde_json::json!({
                "event": "check",
                "ordinal": ordinal,
                "description": description,
                "result": result,
                "verdict": result.verdict().as_str(),
            })),

            AuditEvent::ElevationNotice { ordinal, command } => {
                self.write_event(serde_json::json!({
                    "event": "notice",
                    "ordinal": ordinal,
                    "kind": "elevation",
                    "command": command,
                }))
            }

            AuditEvent::FixFailedWarning {
                ordinal,
                description,
                confidence,
            } => self.write_event(serde_json::json!({
                "event": "warning",
                "ordinal": ordinal,
                "kind": "fix_failed",
                "description": description,
                "confidence": confidence,
            })),

            AuditEvent::ManualFixesPending { entries } => {
                for entry in entries {
                    self.write_event(serde_json::json!({
                        "event": "manual_fix",
                        "ordinal": entry.ordinal,
                        "description": entry.description,
                        "instructions": entry.instructions,
                    }));
                }
            }

            AuditEvent::RunCompleted { tally } => {
                let status = if tally.is_clean() { "clean" } else { "unresolved" };
                self.write_event(serde_json::json!({
                    "event": "complete",
                    "command": "run",
                    "status": status,
                    "total": tally.total(),
                    "tally": tally,
                }))
            }
        }
    }
}
