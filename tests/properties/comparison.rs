//! Property tests for output comparison.

use proptest::prelude::*;

use sysaudit::domain::value_objects::{ComparisonMode, Matcher};

fn ascii_word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _.:-]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Case-insensitive exact matching ignores ASCII case on both sides.
    #[test]
    fn property_exact_folds_case(word in ascii_word()) {
        let matcher = Matcher::new(ComparisonMode::Exact, &word.to_uppercase(), false).unwrap();
        prop_assert!(matcher.is_match(&word.to_lowercase()));
        prop_assert!(matcher.is_match(&word));
    }

    /// PROPERTY: Case-sensitive exact matching is string equality.
    #[test]
    fn property_exact_sensitive_is_equality(a in ascii_word(), b in ascii_word()) {
        let matcher = Matcher::new(ComparisonMode::Exact, &a, true).unwrap();
        prop_assert_eq!(matcher.is_match(&b), a == b);
    }

    /// PROPERTY: A literal pattern matches any output it prefixes, across lines.
    #[test]
    fn property_regex_is_anchored_at_start(prefix in ascii_word(), rest in "[a-z\n]{0,16}") {
        let matcher = Matcher::new(ComparisonMode::Regex, &regex::escape(&prefix), true).unwrap();
        let output = format!("{prefix}{rest}");
        prop_assert!(matcher.is_match(&output));
    }

    /// PROPERTY: Text before the pattern prevents a match.
    #[test]
    fn property_regex_rejects_leading_text(word in "[a-z]{1,12}") {
        let matcher = Matcher::new(ComparisonMode::Regex, &regex::escape(&word), true).unwrap();
        let output = format!("#{word}");
        prop_assert!(!matcher.is_match(&output));
    }
}

#[test]
fn dot_matches_newlines() {
    let matcher = Matcher::new(ComparisonMode::Regex, "enabled.*done", true).unwrap();
    assert!(matcher.is_match("enabled\nsomething\ndone"));
}
