//! Check Result Value Objects

use std::fmt;

use serde::Serialize;

/// Outcome of evaluating one check against the live system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckResult {
    /// A pass condition matched
    ExplicitPass,
    /// A fail condition matched
    ExplicitFail,
    /// At least one test ran, none matched a condition
    NoPass,
    /// Every test was bypassed by privilege gating
    AllSkipped,
}

impl CheckResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::ExplicitPass)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CheckResult::AllSkipped)
    }

    /// Whether this result sends the check into remediation.
    pub fn needs_remediation(&self) -> bool {
        !self.is_pass() && !self.is_skipped()
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            CheckResult::ExplicitPass => Verdict::Passed,
            CheckResult::AllSkipped => Verdict::Skipped,
            CheckResult::ExplicitFail | CheckResult::NoPass => Verdict::Failed,
        }
    }
}

/// Presentation of a `CheckResult` on the per-check report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
    Skipped,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Passed => "PASSED",
            Verdict::Failed => "FAILED",
            Verdict::Skipped => "SKIPPED",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
