//! Tests for the settings module

use super::loader::{parse_with_warnings, resolve, with_env_overrides_from};
use super::types::*;
use crate::domain::policies::ConfidencePolicy;
use crate::error::AuditError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_settings_default() {
    let settings = Settings::default();

    assert!(!settings.run.report_only);
    assert!(settings.run.prompt);
    assert!(!settings.run.skip_privileged);
    assert!(settings.run.write_log);
    assert_eq!(settings.policy(), ConfidencePolicy::default());
    assert_eq!(settings.output.color, ColorMode::Auto);
    assert!(settings.output.unicode);
}

#[test]
fn test_settings_parse_toml() {
    let toml = r#"
[run]
report_only = true
skip_privileged = true
log_dir = "/tmp/audit-logs"
checks_file = "hardening.toml"

[policy]
warn_experimental = false
fix_experimental_by_default = true

[output]
color = "never"
"#;

    let (settings, warnings) = parse_with_warnings(toml, Path::new("sysaudit.toml")).unwrap();

    assert!(warnings.is_empty());
    assert!(settings.run.report_only);
    assert!(settings.run.prompt);
    assert_eq!(settings.run.log_dir, Some(PathBuf::from("/tmp/audit-logs")));
    assert_eq!(settings.run.checks_file, Some(PathBuf::from("hardening.toml")));
    assert!(!settings.policy.warn_experimental);
    assert!(settings.policy.fix_experimental_by_default);
    assert_eq!(settings.output.color, ColorMode::Never);
}

#[test]
fn test_unknown_key_warning_with_suggestion() {
    let toml = "[run]\nreport_onyl = true\n";

    let (_, warnings) = parse_with_warnings(toml, Path::new("sysaudit.toml")).unwrap();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "run.report_onyl");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("report_only"));
}

#[test]
fn test_invalid_value_is_an_error() {
    let toml = "[run]\nprompt = \"sometimes\"\n";

    let err = parse_with_warnings(toml, Path::new("sysaudit.toml")).unwrap_err();

    assert!(matches!(err, AuditError::InvalidSettings { .. }));
}

#[test]
fn test_env_overrides() {
    let settings = with_env_overrides_from(
        Settings::default(),
        env(&[
            ("SYSAUDIT_REPORT_ONLY", "1"),
            ("SYSAUDIT_PROMPT", "false"),
            ("SYSAUDIT_FIX_EXPERIMENTAL", "yes"),
            ("SYSAUDIT_LOG_DIR", "/var/log/audit"),
            ("SYSAUDIT_COLOR", "ALWAYS"),
        ]),
    );

    assert!(settings.run.report_only);
    assert!(!settings.run.prompt);
    assert!(settings.policy.fix_experimental_by_default);
    assert_eq!(settings.run.log_dir, Some(PathBuf::from("/var/log/audit")));
    assert_eq!(settings.output.color, ColorMode::Always);
}

#[test]
fn test_invalid_env_boolean_is_ignored() {
    let settings = with_env_overrides_from(
        Settings::default(),
        env(&[("SYSAUDIT_WRITE_LOG", "perhaps")]),
    );

    assert!(settings.run.write_log);
}

#[test]
fn test_resolve_prefers_explicit_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("sysaudit.toml"), "[run]\nreport_only = true\n").unwrap();
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "[run]\nskip_privileged = true\n").unwrap();

    let (settings, _) = resolve(Some(&explicit), dir.path()).unwrap();

    assert!(settings.run.skip_privileged);
}

#[test]
fn test_resolve_discovers_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("sysaudit.toml"),
        "[policy]\nwarn_recommended = false\n",
    )
    .unwrap();

    let (settings, _) = resolve(None, dir.path()).unwrap();

    assert!(!settings.policy.warn_recommended);
}

#[test]
fn test_resolve_missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();

    let result = resolve(Some(&dir.path().join("absent.toml")), dir.path());

    assert!(matches!(result, Err(AuditError::Io(_))));
}

#[test]
fn test_audit_options_follow_settings() {
    let mut settings = Settings::default();
    settings.run.report_only = true;
    settings.policy.fix_recommended_by_default = false;

    let options = settings.audit_options();

    assert!(options.report_only);
    assert!(options.prompt);
    assert!(!options.policy.fix_recommended_by_default);
}
