//! Audit Result
//!
//! Result types for audit runs.

use serde::Serialize;

use crate::domain::ports::ManualFixEntry;
use crate::domain::value_objects::{CheckResult, ConfigWarning, Outcome, Tally};

/// Disposition of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub ordinal: usize,
    pub description: String,
    /// Result of the first evaluation, before any fix
    pub initial: CheckResult,
    pub outcome: Outcome,
}

/// Result of an audit run
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub tally: Tally,
    pub manual_fixes: Vec<ManualFixEntry>,
    pub outcomes: Vec<CheckOutcome>,
    /// Non-fatal warnings from decoding the definitions
    pub warnings: Vec<ConfigWarning>,
}

impl AuditReport {
    /// True when no check is left misconfigured
    pub fn is_clean(&self) -> bool {
        self.tally.is_clean()
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.outcome.is_unresolved())
    }
}
