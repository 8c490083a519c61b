//! Property tests for definition decoding.

use std::path::Path;

use proptest::prelude::*;

use sysaudit::infrastructure::repositories::{parse_definitions, DefinitionFormat};

fn description() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,30}").unwrap()
}

fn confidence() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["required", "recommended", "experimental"])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary input is rejected or accepted, never a panic.
    #[test]
    fn property_json_decoding_never_panics(content in ".{0,256}") {
        let _ = parse_definitions(&content, DefinitionFormat::Json, Path::new("fuzz.json"));
    }

    #[test]
    fn property_toml_decoding_never_panics(content in ".{0,256}") {
        let _ = parse_definitions(&content, DefinitionFormat::Toml, Path::new("fuzz.toml"));
    }

    /// PROPERTY: Well-formed entries decode in order, one check each.
    #[test]
    fn property_well_formed_entries_keep_order(
        entries in prop::collection::vec((description(), confidence()), 0..12),
    ) {
        let json: Vec<serde_json::Value> = entries
            .iter()
            .map(|(description, confidence)| serde_json::json!({
                "description": description,
                "confidence": confidence,
                "type": "exact match",
                "command": "echo 1",
                "case_sensitive": false,
                "expected_stdout": "1",
                "fix": { "manual": "Print 1" },
            }))
            .collect();
        let content = serde_json::to_string(&json).unwrap();

        let loaded = parse_definitions(&content, DefinitionFormat::Json, Path::new("gen.json")).unwrap();

        prop_assert_eq!(loaded.checks.len(), entries.len());
        prop_assert!(loaded.warnings.is_empty());
        for (check, (description, confidence)) in loaded.checks.iter().zip(&entries) {
            prop_assert_eq!(check.description(), description.as_str());
            prop_assert_eq!(check.confidence().as_str(), *confidence);
        }
    }
}
