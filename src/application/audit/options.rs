//! Audit Options
//!
//! Run-level toggles for one audit.

use crate::domain::policies::ConfidencePolicy;

/// Options for the audit use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOptions {
    /// Evaluate only; never attempt a fix
    pub report_only: bool,
    /// Ask before each fix. When false the policy default answers.
    pub prompt: bool,
    /// Bypass tests that need elevated privileges
    pub skip_privileged: bool,
    /// Warning and default-answer toggles per confidence level
    pub policy: ConfidencePolicy,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            report_only: false,
            prompt: true,
            skip_privileged: false,
            policy: ConfidencePolicy::default(),
        }
    }
}

impl AuditOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report_only(mut self, report_only: bool) -> Self {
        self.report_only = report_only;
        self
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_skip_privileged(mut self, skip: bool) -> Self {
        self.skip_privileged = skip;
        self
    }

    pub fn with_policy(mut self, policy: ConfidencePolicy) -> Self {
        self.policy = policy;
        self
    }
}
