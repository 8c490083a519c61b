//! Property tests for whole audit runs against scripted command output.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use proptest::prelude::*;

use sysaudit::domain::ports::{CheckRepository, CommandRunner, LoadedChecks};
use sysaudit::{
    AuditOptions, AuditResult, AuditUseCase, Check, ComparisonMode, Confidence, Fix, Outcome,
    Test,
};

struct InMemory(Vec<Check>);

impl CheckRepository for InMemory {
    fn load(&self) -> AuditResult<LoadedChecks> {
        Ok(LoadedChecks {
            checks: self.0.clone(),
            warnings: Vec::new(),
        })
    }
}

/// Answers each test command from a table and records every command run
struct Scripted {
    outputs: HashMap<String, String>,
    ran: Mutex<Vec<String>>,
}

impl CommandRunner for Scripted {
    fn execute(&self, command: &str) -> io::Result<String> {
        if let Ok(mut ran) = self.ran.lock() {
            ran.push(command.to_string());
        }
        Ok(self.outputs.get(command).cloned().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy)]
enum Output {
    Pass,
    Fail,
    Neither,
}

fn check_shape() -> impl Strategy<Value = (Output, bool, Confidence)> {
    (
        prop_oneof![Just(Output::Pass), Just(Output::Fail), Just(Output::Neither)],
        any::<bool>(),
        prop::sample::select(Confidence::ALL.to_vec()),
    )
}

fn build(shapes: &[(Output, bool, Confidence)]) -> (Vec<Check>, HashMap<String, String>) {
    let mut checks = Vec::new();
    let mut outputs = HashMap::new();
    for (i, (output, has_fix, confidence)) in shapes.iter().enumerate() {
        let command = format!("test-{i}");
        let value = match output {
            Output::Pass => "on",
            Output::Fail => "off",
            Output::Neither => "unknown",
        };
        outputs.insert(command.clone(), value.to_string());

        let test = Test::builder(command, ComparisonMode::Exact)
            .pass("on")
            .fail("off")
            .build()
            .unwrap();
        let fix = if *has_fix {
            Fix::command(format!("fix-{i}"))
        } else {
            Fix::none()
        };
        checks.push(Check::new(format!("check {i}"), *confidence, vec![test], fix).unwrap());
    }
    (checks, outputs)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every check gets exactly one outcome, in definition order.
    #[test]
    fn property_one_outcome_per_check(
        shapes in prop::collection::vec(check_shape(), 0..16),
        report_only in any::<bool>(),
    ) {
        let (checks, outputs) = build(&shapes);
        let runner = Scripted { outputs, ran: Mutex::new(Vec::new()) };
        let use_case = AuditUseCase::new(InMemory(checks), &runner);
        let options = AuditOptions::new().with_report_only(report_only).with_prompt(false);

        let report = use_case.execute(&options).unwrap();

        prop_assert_eq!(report.tally.total(), shapes.len());
        let ordinals: Vec<usize> = report.outcomes.iter().map(|o| o.ordinal).collect();
        prop_assert_eq!(ordinals, (1..=shapes.len()).collect::<Vec<_>>());

        for (outcome, (output, _, _)) in report.outcomes.iter().zip(&shapes) {
            if matches!(output, Output::Pass) {
                prop_assert_eq!(outcome.outcome, Outcome::PassedWithoutFix);
            } else {
                prop_assert!(outcome.outcome != Outcome::PassedWithoutFix);
            }
        }
    }

    /// PROPERTY: Report-only runs never execute a fix command.
    #[test]
    fn property_report_only_runs_no_fix(shapes in prop::collection::vec(check_shape(), 0..16)) {
        let (checks, outputs) = build(&shapes);
        let runner = Scripted { outputs, ran: Mutex::new(Vec::new()) };
        let use_case = AuditUseCase::new(InMemory(checks), &runner);
        let options = AuditOptions::new().with_report_only(true);

        let report = use_case.execute(&options).unwrap();

        let ran = runner.ran.lock().unwrap();
        prop_assert!(ran.iter().all(|c| c.starts_with("test-")));
        let failing = shapes.iter().filter(|(o, _, _)| !matches!(o, Output::Pass)).count();
        prop_assert_eq!(report.tally.fix_skipped, failing);
    }
}
