//! Test Entity
//!
//! One command-and-comparison unit within a check.

use crate::domain::value_objects::{ComparisonMode, Matcher};

use super::DefinitionError;

/// Outcome of comparing one test's output against its conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestVerdict {
    Fail,
    Pass,
    NoMatch,
}

/// A single test: run `command`, compare its trimmed output.
///
/// At least one of the pass and fail conditions is present. When both
/// match the same output, the fail condition wins.
#[derive(Debug, Clone)]
pub struct Test {
    command: String,
    mode: ComparisonMode,
    case_sensitive: bool,
    pass: Option<Matcher>,
    fail: Option<Matcher>,
    privileged: bool,
}

impl Test {
    pub fn builder(command: impl Into<String>, mode: ComparisonMode) -> TestBuilder {
        TestBuilder {
            command: command.into(),
            mode,
            case_sensitive: false,
            pass: None,
            fail: None,
            privileged: None,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn pass_condition(&self) -> Option<&str> {
        self.pass.as_ref().map(Matcher::source)
    }

    pub fn fail_condition(&self) -> Option<&str> {
        self.fail.as_ref().map(Matcher::source)
    }

    /// Whether running this test needs elevated privileges
    pub fn requires_privilege(&self) -> bool {
        self.privileged
    }

    /// Compare output against the fail condition first, then the pass condition.
    pub fn judge(&self, output: &str) -> TestVerdict {
        if self.fail.as_ref().is_some_and(|m| m.is_match(output)) {
            return TestVerdict::Fail;
        }
        if self.pass.as_ref().is_some_and(|m| m.is_match(output)) {
            return TestVerdict::Pass;
        }
        TestVerdict::NoMatch
    }
}

/// Builder for [`Test`]; `build` enforces the test invariants.
#[derive(Debug, Clone)]
pub struct TestBuilder {
    command: String,
    mode: ComparisonMode,
    case_sensitive: bool,
    pass: Option<String>,
    fail: Option<String>,
    privileged: Option<bool>,
}

impl TestBuilder {
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn pass(mut self, condition: impl Into<String>) -> Self {
        self.pass = Some(condition.into());
        self
    }

    pub fn fail(mut self, condition: impl Into<String>) -> Self {
        self.fail = Some(condition.into());
        self
    }

    pub fn pass_opt(mut self, condition: Option<String>) -> Self {
        self.pass = condition;
        self
    }

    pub fn fail_opt(mut self, condition: Option<String>) -> Self {
        self.fail = condition;
        self
    }

    /// Override privilege detection. Without an override, a test is
    /// privileged when its command starts with `sudo`.
    pub fn privileged(mut self, privileged: bool) -> Self {
        self.privileged = Some(privileged);
        self
    }

    pub fn build(self) -> Result<Test, DefinitionError> {
        if self.command.trim().is_empty() {
            return Err(DefinitionError::EmptyCommand);
        }
        if self.pass.is_none() && self.fail.is_none() {
            return Err(DefinitionError::NoCondition {
                command: self.command,
            });
        }

        let compile = |condition: Option<String>| -> Result<Option<Matcher>, DefinitionError> {
            condition
                .map(|c| {
                    Matcher::new(self.mode, &c, self.case_sensitive).map_err(|e| {
                        DefinitionError::InvalidPattern {
                            pattern: c.clone(),
                            message: e.to_string(),
                        }
                    })
                })
                .transpose()
        };

        let fail = compile(self.fail.clone())?;
        let pass = compile(self.pass.clone())?;
        let privileged = self
            .privileged
            .unwrap_or_else(|| starts_with_sudo(&self.command));

        Ok(Test {
            command: self.command,
            mode: self.mode,
            case_sensitive: self.case_sensitive,
            pass,
            fail,
            privileged,
        })
    }
}

fn starts_with_sudo(command: &str) -> bool {
    command.split_whitespace().next() == Some("sudo")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_conditions_is_rejected() {
        let err = Test::builder("defaults read com.apple.x", ComparisonMode::Exact)
            .build()
            .unwrap_err();
        assert!(matches!(err, DefinitionError::NoCondition { .. }));
    }

    #[test]
    fn empty_command_is_rejected() {
        let err = Test::builder("   ", ComparisonMode::Exact)
            .pass("1")
            .build()
            .unwrap_err();
        assert_eq!(err, DefinitionError::EmptyCommand);
    }

    #[test]
    fn invalid_regex_is_a_definition_error() {
        let err = Test::builder("echo", ComparisonMode::Regex)
            .pass("(")
            .build()
            .unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidPattern { .. }));
    }

    #[test]
    fn fail_condition_takes_precedence_over_pass() {
        let test = Test::builder("echo 0", ComparisonMode::Regex)
            .case_sensitive(true)
            .pass("^0$")
            .fail("^0$")
            .build()
            .unwrap();
        assert_eq!(test.judge("0"), TestVerdict::Fail);
    }

    #[test]
    fn judge_reports_no_match() {
        let test = Test::builder("echo", ComparisonMode::Exact)
            .pass("1")
            .build()
            .unwrap();
        assert_eq!(test.judge("2"), TestVerdict::NoMatch);
    }

    #[test]
    fn sudo_commands_are_privileged_by_default() {
        let test = Test::builder("sudo fdesetup status", ComparisonMode::Regex)
            .pass("FileVault is On")
            .build()
            .unwrap();
        assert!(test.requires_privilege());

        let test = Test::builder("pseudo-tool", ComparisonMode::Exact)
            .pass("x")
            .build()
            .unwrap();
        assert!(!test.requires_privilege());
    }

    #[test]
    fn explicit_privilege_overrides_detection() {
        let test = Test::builder("sudo true", ComparisonMode::Exact)
            .pass("")
            .privileged(false)
            .build()
            .unwrap();
        assert!(!test.requires_privilege());
    }

    #[test]
    fn conditions_keep_their_source_text() {
        let test = Test::builder("echo", ComparisonMode::Regex)
            .pass("on.*")
            .fail("off")
            .build()
            .unwrap();
        assert_eq!(test.pass_condition(), Some("on.*"));
        assert_eq!(test.fail_condition(), Some("off"));
    }
}
