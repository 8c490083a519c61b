//! Audit Event Port
//!
//! Observable interface for an audit run. Console output, the NDJSON
//! stream and the run log file are all sinks of these events.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{CheckResult, Confidence, Tally};

/// A check that needs manual attention after the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualFixEntry {
    pub ordinal: usize,
    pub description: String,
    pub instructions: String,
}

/// Event emitted during an audit run
#[derive(Debug, Clone)]
pub enum AuditEvent {
    /// Run started
    RunStarted {
        check_count: usize,
        source: Option<PathBuf>,
    },

    /// A check was evaluated (initially or after a fix)
    CheckEvaluated {
        ordinal: usize,
        description: String,
        result: CheckResult,
    },

    /// A privileged fix is about to run and may ask for a password
    ElevationNotice { ordinal: usize, command: String },

    /// The last fix attempt left the check failing
    FixFailedWarning {
        ordinal: usize,
        description: String,
        confidence: Confidence,
    },

    /// Checks that could not be fixed automatically, in ordinal order
    ManualFixesPending { entries: Vec<ManualFixEntry> },

    /// Run completed
    RunCompleted { tally: Tally },
}

/// Trait for receiving audit events
///
/// Implementations can be:
/// - ConsoleEventSink: colored report lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - LogFileSink: plain-text run log
/// - NoopEventSink: silent operation
pub trait AuditEventSink: Send + Sync {
    fn on_event(&self, event: &AuditEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl AuditEventSink for NoopEventSink {
    fn on_event(&self, _event: &AuditEvent) {}
}

impl<T: AuditEventSink + ?Sized> AuditEventSink for std::sync::Arc<T> {
    fn on_event(&self, event: &AuditEvent) {
        (**self).on_event(event)
    }
}
