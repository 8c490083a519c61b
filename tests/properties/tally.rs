//! Property tests for the outcome tally.

use proptest::prelude::*;

use sysaudit::{Outcome, Tally};

fn outcome() -> impl Strategy<Value = Outcome> {
    prop::sample::select(Outcome::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every recorded outcome lands in exactly one counter.
    #[test]
    fn property_total_equals_recorded(outcomes in prop::collection::vec(outcome(), 0..64)) {
        let mut tally = Tally::new();
        for outcome in &outcomes {
            tally.record(*outcome);
        }

        prop_assert_eq!(tally.total(), outcomes.len());
        for kind in Outcome::ALL {
            let expected = outcomes.iter().filter(|o| **o == kind).count();
            prop_assert_eq!(tally.count(kind), expected);
        }
    }

    /// PROPERTY: Percentages cover the whole run.
    #[test]
    fn property_percentages_sum_to_hundred(outcomes in prop::collection::vec(outcome(), 1..64)) {
        let mut tally = Tally::new();
        for outcome in &outcomes {
            tally.record(*outcome);
        }

        let sum: f64 = tally.rows().iter().map(|row| row.percent).sum();
        prop_assert!((sum - 100.0).abs() < 1e-6, "sum was {}", sum);
    }

    /// PROPERTY: A run is clean iff nothing is left misconfigured.
    #[test]
    fn property_clean_iff_no_unresolved(outcomes in prop::collection::vec(outcome(), 0..32)) {
        let mut tally = Tally::new();
        for outcome in &outcomes {
            tally.record(*outcome);
        }

        let unresolved = outcomes.iter().filter(|o| o.is_unresolved()).count();
        prop_assert_eq!(tally.unresolved(), unresolved);
        prop_assert_eq!(tally.is_clean(), unresolved == 0);
    }
}

#[test]
fn empty_run_reports_zero_percent() {
    let tally = Tally::new();
    for row in tally.rows() {
        assert_eq!(row.count, 0);
        assert_eq!(row.percent, 0.0);
    }
}

#[test]
fn rows_render_as_aligned_columns() {
    let mut tally = Tally::new();
    tally.record(Outcome::PassedWithoutFix);
    tally.record(Outcome::PassedWithoutFix);
    tally.record(Outcome::PassedAfterFix);
    tally.record(Outcome::FixSkipped);

    let rendered = tally
        .rows()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(rendered, @r"
    passed without fix          2  50.0%
    passed after fix            1  25.0%
    fix attempted, failed       0   0.0%
    fix skipped (report-only)   1  25.0%
    fix declined                0   0.0%
    checks skipped              0   0.0%
    ");
}
