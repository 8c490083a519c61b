//! Comparison Value Objects
//!
//! How a test's command output is compared against its pass and fail
//! conditions.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

/// Comparison mode of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonMode {
    /// Whole output equals the condition
    Exact,
    /// Condition is a pattern matched at the start of the output
    Regex,
}

impl ComparisonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Exact => "exact match",
            ComparisonMode::Regex => "regex match",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "exact match" => Ok(ComparisonMode::Exact),
            "regex match" => Ok(ComparisonMode::Regex),
            other => Err(format!(
                "unknown comparison type '{}' (expected 'exact match' or 'regex match')",
                other
            )),
        }
    }
}

/// A compiled pass or fail condition.
///
/// Regex conditions are anchored at the start of the output, let `.` match
/// newlines, and fold case unless the test is case sensitive.
#[derive(Debug, Clone)]
pub enum Matcher {
    Exact { expected: String, case_sensitive: bool },
    Regex { source: String, regex: Regex },
}

impl Matcher {
    pub fn new(
        mode: ComparisonMode,
        condition: &str,
        case_sensitive: bool,
    ) -> Result<Self, regex::Error> {
        match mode {
            ComparisonMode::Exact => Ok(Matcher::Exact {
                expected: condition.to_string(),
                case_sensitive,
            }),
            ComparisonMode::Regex => {
                let regex = RegexBuilder::new(&format!("^(?:{})", condition))
                    .dot_matches_new_line(true)
                    .case_insensitive(!case_sensitive)
                    .build()?;
                Ok(Matcher::Regex {
                    source: condition.to_string(),
                    regex,
                })
            }
        }
    }

    pub fn is_match(&self, output: &str) -> bool {
        match self {
            Matcher::Exact {
                expected,
                case_sensitive: true,
            } => output == expected,
            Matcher::Exact {
                expected,
                case_sensitive: false,
            } => output.to_lowercase() == expected.to_lowercase(),
            Matcher::Regex { regex, .. } => regex.is_match(output),
        }
    }

    /// The condition as written in the definition
    pub fn source(&self) -> &str {
        match self {
            Matcher::Exact { expected, .. } => expected,
            Matcher::Regex { source, .. } => source,
        }
    }
}
