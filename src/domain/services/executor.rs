//! Check execution service
//!
//! Runs a check's tests in order against the live system and classifies
//! the outcome. Halts at the first explicit pass or fail.

use crate::domain::entities::{Check, TestVerdict};
use crate::domain::ports::{AuditEvent, AuditEventSink, CommandRunner};
use crate::domain::value_objects::CheckResult;

/// Where and how an evaluation is reported
#[derive(Clone, Copy)]
pub struct Report<'a> {
    pub ordinal: usize,
    /// Suppress the report line unless the check passes
    pub quiet: bool,
    pub sink: &'a dyn AuditEventSink,
}

/// Evaluates checks through a [`CommandRunner`]
pub struct CheckExecutor<R> {
    runner: R,
}

impl<R: CommandRunner> CheckExecutor<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Evaluate `check` without reporting.
    ///
    /// Privileged tests are bypassed when `skip_privileged` is set. A test
    /// whose command cannot be launched counts as not passing.
    pub fn evaluate(&self, check: &Check, skip_privileged: bool) -> CheckResult {
        let mut ran_any = false;

        for test in check.tests() {
            if skip_privileged && test.requires_privilege() {
                tracing::debug!(command = test.command(), "skipping privileged test");
                continue;
            }
            ran_any = true;

            let output = match self.runner.execute(test.command()) {
                Ok(output) => output,
                Err(e) => {
                    tracing::warn!(command = test.command(), error = %e, "failed to run test command");
                    continue;
                }
            };

            let verdict = test.judge(&output);
            tracing::debug!(
                command = test.command(),
                output = %output,
                pass = test.pass_condition(),
                fail = test.fail_condition(),
                verdict = ?verdict,
                "test evaluated"
            );

            match verdict {
                TestVerdict::Fail => return CheckResult::ExplicitFail,
                TestVerdict::Pass => return CheckResult::ExplicitPass,
                TestVerdict::NoMatch => {}
            }
        }

        if ran_any {
            CheckResult::NoPass
        } else {
            CheckResult::AllSkipped
        }
    }

    /// Evaluate `check` and emit a `CheckEvaluated` event.
    ///
    /// Quiet evaluations only report a pass.
    pub fn evaluate_reported(
        &self,
        check: &Check,
        skip_privileged: bool,
        report: Report<'_>,
    ) -> CheckResult {
        let result = self.evaluate(check, skip_privileged);
        if !report.quiet || result.is_pass() {
            report.sink.on_event(&AuditEvent::CheckEvaluated {
                ordinal: report.ordinal,
                description: check.description().to_string(),
                result,
            });
        }
        result
    }
}
