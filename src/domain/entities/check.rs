//! Check Entity
//!
//! A named configuration assertion with ordered tests and optional remediation.

use crate::domain::value_objects::Confidence;

use super::{DefinitionError, Test};

/// Remediation attached to a check.
///
/// Any of the three parts may be absent. A failing check with none of them
/// stays unremediated for the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fix {
    /// Unprivileged fix command
    pub command: Option<String>,
    /// Fix command that requests elevated privileges
    pub sudo_command: Option<String>,
    /// Instructions shown when automatic remediation is unavailable or fails
    pub manual: Option<String>,
}

impl Fix {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            ..Self::default()
        }
    }

    pub fn sudo(sudo_command: impl Into<String>) -> Self {
        Self {
            sudo_command: Some(sudo_command.into()),
            ..Self::default()
        }
    }

    pub fn manual(instructions: impl Into<String>) -> Self {
        Self {
            manual: Some(instructions.into()),
            ..Self::default()
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_sudo(mut self, sudo_command: impl Into<String>) -> Self {
        self.sudo_command = Some(sudo_command.into());
        self
    }

    pub fn with_manual(mut self, instructions: impl Into<String>) -> Self {
        self.manual = Some(instructions.into());
        self
    }

    /// Whether an automatic (unprivileged or privileged) fix exists
    pub fn is_automated(&self) -> bool {
        self.command.is_some() || self.sudo_command.is_some()
    }

    /// Command shown when asking whether to apply the fix
    pub fn display_command(&self) -> Option<&str> {
        self.command.as_deref().or(self.sudo_command.as_deref())
    }
}

/// A configuration check. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Check {
    description: String,
    confidence: Confidence,
    tests: Vec<Test>,
    fix: Fix,
}

impl Check {
    pub fn new(
        description: impl Into<String>,
        confidence: Confidence,
        tests: Vec<Test>,
        fix: Fix,
    ) -> Result<Self, DefinitionError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DefinitionError::EmptyDescription);
        }
        if tests.is_empty() {
            return Err(DefinitionError::NoTests { description });
        }
        Ok(Self {
            description,
            confidence,
            tests,
            fix,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn fix(&self) -> &Fix {
        &self.fix
    }

    pub fn manual_fix(&self) -> Option<&str> {
        self.fix.manual.as_deref()
    }
}
