//! Plain-text rendering of audit events.

use crate::domain::ports::{AuditEvent, ManualFixEntry};
use crate::domain::value_objects::{Tally, Verdict};

pub const SEPARATOR: &str = "==========================";

pub const ELEVATION_NOTICE: &str =
    "Attempting configuration fix with elevated privileges; you may be prompted for your login password...";

pub const FIX_FAILED_WARNING: &str = "WARNING: Attempted fix FAILED";

pub fn check_line(ordinal: usize, description: &str, verdict: Verdict) -> String {
    format!("CHECK #{ordinal}: {description}... {verdict}")
}

pub fn manual_fix_header(count: usize) -> String {
    let noun = if count == 1 { "check" } else { "checks" };
    format!(
        "{count} {noun} could not be automatically fixed, but manual instructions are available. \
         Please manually remediate these problems and re-run the tool:"
    )
}

pub fn manual_fix_lines(entries: &[ManualFixEntry]) -> Vec<String> {
    let mut lines = vec![SEPARATOR.to_string(), manual_fix_header(entries.len())];
    for entry in entries {
        lines.push(format!("CHECK #{}: {}", entry.ordinal, entry.description));
        lines.push(entry.instructions.clone());
        lines.push(SEPARATOR.to_string());
    }
    lines
}

pub fn tally_lines(tally: &Tally) -> Vec<String> {
    let mut lines = vec!["Summary:".to_string()];
    lines.extend(tally.rows().iter().map(|row| format!("  {row}")));
    lines
}

/// Lines written for an event, without color
pub fn render(event: &AuditEvent) -> Vec<String> {
    match event {
        AuditEvent::RunStarted {
            check_count,
            source,
        } => {
            let source = source
                .as_ref()
                .map(|p| format!(" from {}", p.display()))
                .unwrap_or_default();
            vec![format!("Running {check_count} checks{source}")]
        }
        AuditEvent::CheckEvaluated {
            ordinal,
            description,
            result,
        } => vec![check_line(*ordinal, description, result.verdict())],
        AuditEvent::ElevationNotice { command, .. } => vec![
            format!("\t{ELEVATION_NOTICE}"),
            format!("\tCommand: '{command}'"),
        ],
        AuditEvent::FixFailedWarning { .. } => vec![format!("\t{FIX_FAILED_WARNING}")],
        AuditEvent::ManualFixesPending { entries } => manual_fix_lines(entries),
        AuditEvent::RunCompleted { tally } => tally_lines(tally),
    }
}
