//! Check definition fixtures.
//!
//! Every command is plain POSIX shell so the tests run anywhere `sh` does.

/// One check whose test passes as-is
pub const PASSING: &str = r#"[
  {
    "description": "Echo reports on",
    "confidence": "required",
    "tests": [
      {
        "type": "exact match",
        "command": "echo ON",
        "case_sensitive": false,
        "expected_stdout": "on"
      }
    ],
    "fix": { "manual": "Make echo print on" }
  }
]"#;

/// Failing until `state.txt` contains `on`; the fix writes it.
pub const FIXABLE: &str = r#"[
  {
    "description": "State file is on",
    "confidence": "required",
    "tests": [
      {
        "type": "exact match",
        "command": "cat state.txt",
        "case_sensitive": true,
        "expected_stdout": "on",
        "fail_stdout": "off"
      }
    ],
    "fix": {
      "command": "echo on > state.txt",
      "manual": "Write 'on' into state.txt"
    }
  }
]"#;

/// Failing with only manual instructions
pub const MANUAL_ONLY: &str = r#"[
  {
    "description": "Screen lock is immediate",
    "confidence": "recommended",
    "tests": [
      {
        "type": "regex match",
        "command": "echo 'delay: 300'",
        "case_sensitive": false,
        "expected_regex": "delay: 0$"
      }
    ],
    "fix": {
      "manual": "Open https://example.com/lock and set the delay to zero"
    }
  }
]"#;

/// A privileged test only
pub const PRIVILEGED_ONLY: &str = r#"[
  {
    "description": "Audit daemon runs",
    "confidence": "experimental",
    "tests": [
      {
        "type": "exact match",
        "command": "echo running",
        "case_sensitive": false,
        "expected_stdout": "running",
        "privileged": true
      }
    ],
    "fix": { "manual": "Start the audit daemon" }
  }
]"#;

/// Three checks covering pass, manual-only failure and a comment entry
pub const MIXED: &str = r#"[
  { "_comment": "baseline" },
  {
    "description": "Echo reports on",
    "confidence": "required",
    "type": "exact match",
    "command": "echo on",
    "case_sensitive": "true",
    "expected_stdout": "on",
    "fix": { "manual": "Make echo print on" }
  },
  {
    "description": "Guest account disabled",
    "confidence": "experimental",
    "tests": [
      {
        "type": "exact match",
        "command": "echo 1",
        "case_sensitive": false,
        "expected_stdout": "0",
        "fail_stdout": "1"
      }
    ],
    "fix": {
      "command": "true",
      "sudo_command": "sudo -n true",
      "manual": "Disable the guest account"
    }
  }
]"#;

pub const TOML_DEFINITIONS: &str = r#"
[[check]]
description = "Echo reports on"
confidence = "recommended"
fix = { manual = "Make echo print on" }

[[check.tests]]
type = "exact match"
command = "echo on"
case_sensitive = false
expected_stdout = "on"
"#;

/// Entry with a misspelled key
pub const WITH_TYPO: &str = r#"[
  {
    "description": "Echo reports on",
    "confidence": "required",
    "tests": [
      {
        "type": "exact match",
        "command": "echo on",
        "case_sensitive": false,
        "expected_stdout": "on"
      }
    ],
    "fix": { "manual": "Make echo print on" },
    "descripton": "typo"
  }
]"#;

/// Second entry lacks its confidence
pub const MISSING_CONFIDENCE: &str = r#"[
  {
    "description": "First",
    "confidence": "required",
    "type": "exact match",
    "command": "echo a",
    "case_sensitive": false,
    "expected_stdout": "a",
    "fix": { "manual": "Print a" }
  },
  {
    "description": "Second",
    "type": "exact match",
    "command": "touch should-not-exist",
    "case_sensitive": false,
    "expected_stdout": "a",
    "fix": { "manual": "Print a" }
  }
]"#;
