//! Audit Use Case
//!
//! Drives every check once, in definition order:
//! 1. Evaluate the check
//! 2. Gate remediation (report-only, missing fix, confirmation)
//! 3. Remediate and record the final disposition
//!
//! After the last check the manual-fix list and the tally are reported.

use std::sync::Arc;

use crate::domain::entities::Check;
use crate::domain::policies::ConfidencePolicy;
use crate::domain::ports::{
    AuditEvent, AuditEventSink, CheckRepository, CommandRunner, Confirmer, ManualFixEntry,
    NoopEventSink, PolicyConfirmer,
};
use crate::domain::services::{CheckExecutor, RemediationEngine, Report};
use crate::domain::value_objects::{CheckResult, Outcome, Tally};
use crate::error::AuditResult;

use super::options::AuditOptions;
use super::result::{AuditReport, CheckOutcome};

/// Mutable state of one run
#[derive(Default)]
struct AuditContext {
    tally: Tally,
    manual_fixes: Vec<ManualFixEntry>,
    outcomes: Vec<CheckOutcome>,
}

impl AuditContext {
    fn record(&mut self, ordinal: usize, check: &Check, initial: CheckResult, outcome: Outcome) {
        self.tally.record(outcome);

        if outcome.is_unresolved() {
            match check.manual_fix() {
                Some(instructions) => self.manual_fixes.push(ManualFixEntry {
                    ordinal,
                    description: check.description().to_string(),
                    instructions: instructions.to_string(),
                }),
                None => tracing::debug!(
                    ordinal,
                    "could not satisfy check but no manual fix specified"
                ),
            }
        }

        self.outcomes.push(CheckOutcome {
            ordinal,
            description: check.description().to_string(),
            initial,
            outcome,
        });
    }
}

/// Question asked before applying a check's fix
pub fn fix_question(check: &Check) -> String {
    let descriptor = ConfidencePolicy::descriptor(check.confidence())
        .map(|d| format!("{d} "))
        .unwrap_or_default();
    let command = check.fix().display_command().unwrap_or_default();
    format!("Apply the following {descriptor}fix? This will execute this command: '{command}'")
}

/// Audit use case - orchestrates one run
///
/// Parameterized by its ports so it runs against scripted commands in tests.
pub struct AuditUseCase<CR, R>
where
    CR: CheckRepository,
    R: CommandRunner,
{
    repository: CR,
    executor: CheckExecutor<R>,
}

impl<CR, R> AuditUseCase<CR, R>
where
    CR: CheckRepository,
    R: CommandRunner,
{
    pub fn new(repository: CR, runner: R) -> Self {
        Self {
            repository,
            executor: CheckExecutor::new(runner),
        }
    }

    /// Execute silently, answering every question with the policy default
    pub fn execute(&self, options: &AuditOptions) -> AuditResult<AuditReport> {
        self.execute_full(
            options,
            Arc::new(NoopEventSink),
            Arc::new(PolicyConfirmer),
        )
    }

    /// Execute with event reporting
    pub fn execute_with_events(
        &self,
        options: &AuditOptions,
        event_sink: Arc<dyn AuditEventSink>,
    ) -> AuditResult<AuditReport> {
        self.execute_full(options, event_sink, Arc::new(PolicyConfirmer))
    }

    /// Execute with event reporting and a custom confirmer
    ///
    /// Definitions are loaded and validated before any command runs.
    pub fn execute_full(
        &self,
        options: &AuditOptions,
        event_sink: Arc<dyn AuditEventSink>,
        confirmer: Arc<dyn Confirmer>,
    ) -> AuditResult<AuditReport> {
        let loaded = self.repository.load()?;
        for warning in &loaded.warnings {
            tracing::warn!(key = %warning.key, file = %warning.file.display(), "unknown key");
        }

        event_sink.on_event(&AuditEvent::RunStarted {
            check_count: loaded.checks.len(),
            source: self.repository.source().map(|p| p.to_path_buf()),
        });

        let mut report = self.run_checks(
            &loaded.checks,
            options,
            event_sink.as_ref(),
            confirmer.as_ref(),
        );
        report.warnings = loaded.warnings;
        Ok(report)
    }

    /// Run already loaded checks
    pub fn run_checks(
        &self,
        checks: &[Check],
        options: &AuditOptions,
        sink: &dyn AuditEventSink,
        confirmer: &dyn Confirmer,
    ) -> AuditReport {
        tracing::info!(checks = checks.len(), report_only = options.report_only, "audit started");

        let mut context = AuditContext::default();
        for (index, check) in checks.iter().enumerate() {
            let ordinal = index + 1;
            let (initial, outcome) = self.audit_check(check, ordinal, options, sink, confirmer);
            context.record(ordinal, check, initial, outcome);
        }

        if !context.manual_fixes.is_empty() {
            sink.on_event(&AuditEvent::ManualFixesPending {
                entries: context.manual_fixes.clone(),
            });
        }
        sink.on_event(&AuditEvent::RunCompleted {
            tally: context.tally,
        });
        tracing::info!(
            total = context.tally.total(),
            unresolved = context.tally.unresolved(),
            "audit completed"
        );

        AuditReport {
            tally: context.tally,
            manual_fixes: context.manual_fixes,
            outcomes: context.outcomes,
            warnings: Vec::new(),
        }
    }

    fn audit_check(
        &self,
        check: &Check,
        ordinal: usize,
        options: &AuditOptions,
        sink: &dyn AuditEventSink,
        confirmer: &dyn Confirmer,
    ) -> (CheckResult, Outcome) {
        let report = Report {
            ordinal,
            quiet: false,
            sink,
        };
        let initial = self
            .executor
            .evaluate_reported(check, options.skip_privileged, report);

        let outcome = match initial {
            CheckResult::ExplicitPass => Outcome::PassedWithoutFix,
            CheckResult::AllSkipped => Outcome::ChecksSkipped,
            CheckResult::ExplicitFail | CheckResult::NoPass => {
                self.gated_remediation(check, ordinal, options, sink, confirmer)
            }
        };
        (initial, outcome)
    }

    fn gated_remediation(
        &self,
        check: &Check,
        ordinal: usize,
        options: &AuditOptions,
        sink: &dyn AuditEventSink,
        confirmer: &dyn Confirmer,
    ) -> Outcome {
        if options.report_only {
            return Outcome::FixSkipped;
        }
        if !check.fix().is_automated() {
            tracing::debug!(ordinal, "no automated fix available");
            return Outcome::FixFailed;
        }

        let default = options.policy.default_apply_fix(check.confidence());
        let apply = if options.prompt {
            confirmer.confirm(&fix_question(check), default)
        } else {
            default
        };
        if !apply {
            return Outcome::FixDeclined;
        }

        let engine = RemediationEngine::new(&self.executor, options.policy, sink)
            .skip_privileged(options.skip_privileged);
        let fixed = engine.remediate(check, ordinal);
        tracing::debug!(ordinal, fixed, "remediation finished");

        if fixed {
            Outcome::PassedAfterFix
        } else {
            Outcome::FixFailed
        }
    }
}
