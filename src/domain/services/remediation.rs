//! Remediation service
//!
//! Two-stage fix attempt for a failing check: the unprivileged fix first,
//! then the privileged fix. Each stage is followed by a reverification.

use crate::domain::entities::Check;
use crate::domain::policies::ConfidencePolicy;
use crate::domain::ports::{AuditEvent, AuditEventSink, CommandRunner};

use super::executor::{CheckExecutor, Report};

/// Applies fixes and reverifies through a [`CheckExecutor`]
pub struct RemediationEngine<'a, R> {
    executor: &'a CheckExecutor<R>,
    policy: ConfidencePolicy,
    sink: &'a dyn AuditEventSink,
    skip_privileged: bool,
}

impl<'a, R: CommandRunner> RemediationEngine<'a, R> {
    pub fn new(
        executor: &'a CheckExecutor<R>,
        policy: ConfidencePolicy,
        sink: &'a dyn AuditEventSink,
    ) -> Self {
        Self {
            executor,
            policy,
            sink,
            skip_privileged: false,
        }
    }

    /// Reverify with the same privilege gating as the initial evaluation.
    pub fn skip_privileged(mut self, skip: bool) -> Self {
        self.skip_privileged = skip;
        self
    }

    /// Attempt to fix `check`. Returns true iff it now passes.
    ///
    /// Does nothing when the check has no automated fix.
    pub fn remediate(&self, check: &Check, ordinal: usize) -> bool {
        let fix = check.fix();

        if let Some(command) = fix.command.as_deref() {
            let last = fix.sudo_command.is_none();
            self.apply(command, ordinal);
            if self.reverify(check, ordinal, last) {
                return true;
            }
            if last {
                return false;
            }
        }

        if let Some(command) = fix.sudo_command.as_deref() {
            self.sink.on_event(&AuditEvent::ElevationNotice {
                ordinal,
                command: command.to_string(),
            });
            self.apply(command, ordinal);
            return self.reverify(check, ordinal, true);
        }

        false
    }

    fn apply(&self, command: &str, ordinal: usize) {
        match self.executor.runner().execute(command) {
            Ok(output) => tracing::debug!(ordinal, command, output = %output, "fix applied"),
            Err(e) => tracing::warn!(ordinal, command, error = %e, "failed to run fix command"),
        }
    }

    fn reverify(&self, check: &Check, ordinal: usize, last: bool) -> bool {
        let report = Report {
            ordinal,
            quiet: !last,
            sink: self.sink,
        };
        let passed = self
            .executor
            .evaluate_reported(check, self.skip_privileged, report)
            .is_pass();

        if !passed && last && self.policy.should_warn(check.confidence()) {
            self.sink.on_event(&AuditEvent::FixFailedWarning {
                ordinal,
                description: check.description().to_string(),
                confidence: check.confidence(),
            });
        }
        passed
    }
}
