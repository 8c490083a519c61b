//! Shell Command Runner
//!
//! Runs commands through `sh -c` with stderr folded into stdout.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::CommandRunner;

/// Runs commands with the system shell.
///
/// Stdin is inherited so privileged fixes can ask for a password.
#[derive(Debug, Clone)]
pub struct ShellCommandRunner {
    shell: String,
}

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self {
            shell: "sh".to_string(),
        }
    }

    /// Use a different POSIX shell
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    fn script(command: &str) -> String {
        format!("exec 2>&1\n{command}")
    }
}

impl Default for ShellCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellCommandRunner {
    fn execute(&self, command: &str) -> io::Result<String> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(Self::script(command))
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()?;

        tracing::debug!(command, status = ?output.status.code(), "command finished");
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
