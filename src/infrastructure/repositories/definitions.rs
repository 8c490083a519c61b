//! Check definition decoding
//!
//! Decodes JSON or TOML into raw serde structs, then hands the values to
//! the domain constructors. Unknown keys become warnings.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{Check, Fix, Test};
use crate::domain::ports::LoadedChecks;
use crate::domain::value_objects::{ComparisonMode, Confidence, ConfigWarning};
use crate::error::{AuditError, AuditResult};

const KNOWN_KEYS: &[&str] = &[
    "description",
    "confidence",
    "tests",
    "fix",
    "type",
    "command",
    "case_sensitive",
    "expected_stdout",
    "fail_stdout",
    "expected_regex",
    "fail_regex",
    "privileged",
    "sudo_command",
    "manual",
];

const COMMENT_KEY: &str = "_comment";

/// Encoding of a definition file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Toml,
}

impl DefinitionFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> AuditResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match extension.as_str() {
            "json" => Ok(DefinitionFormat::Json),
            "toml" => Ok(DefinitionFormat::Toml),
            _ => Err(AuditError::UnsupportedFormat {
                extension,
                file: path.to_path_buf(),
            }),
        }
    }
}

/// `case_sensitive` accepts a boolean or the strings "true"/"false"
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Text(String),
}

impl BoolLike {
    fn resolve(&self) -> Option<bool> {
        match self {
            BoolLike::Bool(b) => Some(*b),
            BoolLike::Text(s) => match s.trim().to_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawTest {
    #[serde(rename = "type")]
    kind: Option<String>,
    command: Option<String>,
    case_sensitive: Option<BoolLike>,
    expected_stdout: Option<String>,
    fail_stdout: Option<String>,
    expected_regex: Option<String>,
    fail_regex: Option<String>,
    privileged: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawFix {
    command: Option<String>,
    sudo_command: Option<String>,
    manual: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCheck {
    description: Option<String>,
    confidence: Option<String>,
    tests: Option<Vec<RawTest>>,
    fix: Option<RawFix>,

    // Single-test form
    #[serde(rename = "type")]
    kind: Option<String>,
    command: Option<String>,
    case_sensitive: Option<BoolLike>,
    expected_stdout: Option<String>,
    fail_stdout: Option<String>,
    expected_regex: Option<String>,
    fail_regex: Option<String>,
    privileged: Option<bool>,
    sudo_command: Option<String>,
}

/// Error context for one entry
struct Entry<'a> {
    file: &'a Path,
    ordinal: usize,
}

impl Entry<'_> {
    fn missing(&self, field: impl Into<String>) -> AuditError {
        AuditError::MissingField {
            field: field.into(),
            file: self.file.to_path_buf(),
            ordinal: self.ordinal,
        }
    }

    fn invalid(&self, field: impl Into<String>, message: impl Into<String>) -> AuditError {
        AuditError::InvalidValue {
            field: field.into(),
            file: self.file.to_path_buf(),
            ordinal: self.ordinal,
            message: message.into(),
        }
    }
}

impl RawTest {
    fn into_test(self, entry: &Entry<'_>, prefix: &str) -> AuditResult<Test> {
        let field = |name: &str| format!("{prefix}{name}");

        let kind = self.kind.ok_or_else(|| entry.missing(field("type")))?;
        let mode: ComparisonMode = kind
            .parse()
            .map_err(|e: String| entry.invalid(field("type"), e))?;
        let command = self.command.ok_or_else(|| entry.missing(field("command")))?;
        let case_sensitive = self
            .case_sensitive
            .ok_or_else(|| entry.missing(field("case_sensitive")))?;
        let case_sensitive = case_sensitive.resolve().ok_or_else(|| {
            entry.invalid(field("case_sensitive"), "expected true or false")
        })?;

        let (pass, fail, foreign) = match mode {
            ComparisonMode::Exact => (
                self.expected_stdout,
                self.fail_stdout,
                [("expected_regex", &self.expected_regex), ("fail_regex", &self.fail_regex)],
            ),
            ComparisonMode::Regex => (
                self.expected_regex,
                self.fail_regex,
                [("expected_stdout", &self.expected_stdout), ("fail_stdout", &self.fail_stdout)],
            ),
        };
        if let Some((key, _)) = foreign.iter().find(|(_, value)| value.is_some()) {
            return Err(entry.invalid(field(key), format!("not allowed for type '{mode}'")));
        }

        let mut builder = Test::builder(command, mode)
            .case_sensitive(case_sensitive)
            .pass_opt(pass)
            .fail_opt(fail);
        if let Some(privileged) = self.privileged {
            builder = builder.privileged(privileged);
        }
        builder.build().map_err(|source| AuditError::InvalidCheck {
            file: entry.file.to_path_buf(),
            ordinal: entry.ordinal,
            source,
        })
    }
}

impl RawCheck {
    fn into_check(self, entry: &Entry<'_>) -> AuditResult<Check> {
        let description = self
            .description
            .ok_or_else(|| entry.missing("description"))?;
        let confidence: Confidence = self
            .confidence
            .ok_or_else(|| entry.missing("confidence"))?
            .parse()
            .map_err(|e: String| entry.invalid("confidence", e))?;

        let tests = match self.tests {
            Some(tests) => tests
                .into_iter()
                .enumerate()
                .map(|(i, test)| test.into_test(entry, &format!("tests.{i}.")))
                .collect::<AuditResult<Vec<_>>>()?,
            None if self.command.is_some() => {
                let sudo_command = self.sudo_command;
                let single = RawTest {
                    kind: self.kind,
                    command: self.command,
                    case_sensitive: self.case_sensitive,
                    expected_stdout: self.expected_stdout,
                    fail_stdout: self.fail_stdout,
                    expected_regex: self.expected_regex,
                    fail_regex: self.fail_regex,
                    privileged: self.privileged,
                };
                single_test_form(single, sudo_command, entry)?
            }
            None => return Err(entry.missing("tests")),
        };

        let fix = match self.fix {
            Some(RawFix {
                command: None,
                sudo_command: None,
                manual: None,
            }) => {
                return Err(entry.invalid(
                    "fix",
                    "must carry at least one of command, sudo_command, manual",
                ))
            }
            Some(raw) => Fix {
                command: raw.command,
                sudo_command: raw.sudo_command,
                manual: raw.manual,
            },
            None => return Err(entry.missing("fix")),
        };

        Check::new(description, confidence, tests, fix).map_err(|source| {
            AuditError::InvalidCheck {
                file: entry.file.to_path_buf(),
                ordinal: entry.ordinal,
                source,
            }
        })
    }
}

/// A top-level `sudo_command` becomes a second, privileged test with the
/// same comparison.
fn single_test_form(
    test: RawTest,
    sudo_command: Option<String>,
    entry: &Entry<'_>,
) -> AuditResult<Vec<Test>> {
    let elevated = sudo_command.map(|command| RawTest {
        kind: test.kind.clone(),
        command: Some(command),
        case_sensitive: test
            .case_sensitive
            .as_ref()
            .and_then(BoolLike::resolve)
            .map(BoolLike::Bool),
        expected_stdout: test.expected_stdout.clone(),
        fail_stdout: test.fail_stdout.clone(),
        expected_regex: test.expected_regex.clone(),
        fail_regex: test.fail_regex.clone(),
        privileged: Some(true),
    });

    let mut tests = vec![test.into_test(entry, "")?];
    if let Some(elevated) = elevated {
        tests.push(elevated.into_test(entry, "sudo_command.")?);
    }
    Ok(tests)
}

fn is_comment(entry: &Value) -> bool {
    entry
        .as_object()
        .is_some_and(|object| object.contains_key(COMMENT_KEY))
}

fn malformed(file: &Path, message: impl Into<String>) -> AuditError {
    AuditError::Malformed {
        file: file.to_path_buf(),
        message: message.into(),
    }
}

fn entries(
    content: &str,
    format: DefinitionFormat,
    file: &Path,
) -> AuditResult<(Vec<Value>, Vec<ConfigWarning>)> {
    match format {
        DefinitionFormat::Json => {
            let value: Value =
                serde_json::from_str(content).map_err(|e| malformed(file, e.to_string()))?;
            match value {
                Value::Array(entries) => Ok((entries, Vec::new())),
                _ => Err(malformed(file, "expected a top-level array of checks")),
            }
        }
        DefinitionFormat::Toml => {
            let mut table: toml::Table =
                toml::from_str(content).map_err(|e| malformed(file, e.to_string()))?;
            let checks = table.remove("check");
            let warnings = table
                .keys()
                .map(|key| ConfigWarning::unknown_key(key, file, content, &["check"]))
                .collect();

            let entries = match checks {
                None => Vec::new(),
                Some(toml::Value::Array(items)) => items
                    .into_iter()
                    .map(serde_json::to_value)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| malformed(file, e.to_string()))?,
                Some(_) => return Err(malformed(file, "'check' must be an array of tables")),
            };
            Ok((entries, warnings))
        }
    }
}

/// Decode and validate a complete definition file.
///
/// Any error rejects the whole file. `file` is only used for messages.
pub fn parse_definitions(
    content: &str,
    format: DefinitionFormat,
    file: &Path,
) -> AuditResult<LoadedChecks> {
    let (entries, mut warnings) = entries(content, format, file)?;

    let mut checks = Vec::with_capacity(entries.len());
    for value in entries {
        if is_comment(&value) {
            continue;
        }
        let entry = Entry {
            file,
            ordinal: checks.len() + 1,
        };

        let mut unknown = Vec::new();
        let raw: RawCheck =
            serde_ignored::deserialize(value, |path| unknown.push(path.to_string()))
                .map_err(|e| malformed(file, format!("check #{}: {e}", entry.ordinal)))?;
        warnings.extend(
            unknown
                .iter()
                .map(|path| ConfigWarning::unknown_key(path, file, content, KNOWN_KEYS)),
        );

        checks.push(raw.into_check(&entry)?);
    }

    Ok(LoadedChecks { checks, warnings })
}
