//! Tally Value Objects
//!
//! Six-way disposition counts accumulated over one audit run.

use std::fmt;

use serde::Serialize;

/// Final disposition of a single check. Exactly one per evaluated check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PassedWithoutFix,
    PassedAfterFix,
    FixFailed,
    /// Report-only mode, remediation disabled
    FixSkipped,
    /// User (or policy default) declined the fix
    FixDeclined,
    /// Every test bypassed by privilege gating
    ChecksSkipped,
}

impl Outcome {
    pub const ALL: [Outcome; 6] = [
        Outcome::PassedWithoutFix,
        Outcome::PassedAfterFix,
        Outcome::FixFailed,
        Outcome::FixSkipped,
        Outcome::FixDeclined,
        Outcome::ChecksSkipped,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::PassedWithoutFix => "passed without fix",
            Outcome::PassedAfterFix => "passed after fix",
            Outcome::FixFailed => "fix attempted, failed",
            Outcome::FixSkipped => "fix skipped (report-only)",
            Outcome::FixDeclined => "fix declined",
            Outcome::ChecksSkipped => "checks skipped",
        }
    }

    /// Whether the check is still misconfigured after the run.
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self,
            Outcome::FixFailed | Outcome::FixSkipped | Outcome::FixDeclined
        )
    }
}

/// Outcome counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub passed_without_fix: usize,
    pub passed_after_fix: usize,
    pub fix_failed: usize,
    pub fix_skipped: usize,
    pub fix_declined: usize,
    pub checks_skipped: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        *self.slot(outcome) += 1;
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::PassedWithoutFix => self.passed_without_fix,
            Outcome::PassedAfterFix => self.passed_after_fix,
            Outcome::FixFailed => self.fix_failed,
            Outcome::FixSkipped => self.fix_skipped,
            Outcome::FixDeclined => self.fix_declined,
            Outcome::ChecksSkipped => self.checks_skipped,
        }
    }

    pub fn total(&self) -> usize {
        Outcome::ALL.iter().map(|o| self.count(*o)).sum()
    }

    /// Share of all checks with this outcome, in percent. Zero for an empty run.
    pub fn percent(&self, outcome: Outcome) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(outcome) as f64 * 100.0 / total as f64
    }

    pub fn unresolved(&self) -> usize {
        Outcome::ALL
            .iter()
            .filter(|o| o.is_unresolved())
            .map(|o| self.count(*o))
            .sum()
    }

    pub fn is_clean(&self) -> bool {
        self.unresolved() == 0
    }

    pub fn rows(&self) -> Vec<TallyRow> {
        Outcome::ALL
            .iter()
            .map(|&outcome| TallyRow {
                outcome,
                count: self.count(outcome),
                percent: self.percent(outcome),
            })
            .collect()
    }

    fn slot(&mut self, outcome: Outcome) -> &mut usize {
        match outcome {
            Outcome::PassedWithoutFix => &mut self.passed_without_fix,
            Outcome::PassedAfterFix => &mut self.passed_after_fix,
            Outcome::FixFailed => &mut self.fix_failed,
            Outcome::FixSkipped => &mut self.fix_skipped,
            Outcome::FixDeclined => &mut self.fix_declined,
            Outcome::ChecksSkipped => &mut self.checks_skipped,
        }
    }
}

/// One labeled line of the tally block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TallyRow {
    pub outcome: Outcome,
    pub count: usize,
    pub percent: f64,
}

impl fmt::Display for TallyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<25} {:>3} {:>5.1}%",
            self.outcome.label(),
            self.count,
            self.percent
        )
    }
}
