//! Command Runner Port
//!
//! Executes a check, test or fix command against the live system.

use std::io;

/// Runs shell-interpreted commands synchronously.
///
/// `execute` blocks until the command exits and returns its combined
/// stdout and stderr, trimmed. A non-zero exit status is not an error;
/// only failing to launch the command is.
pub trait CommandRunner {
    fn execute(&self, command: &str) -> io::Result<String>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn execute(&self, command: &str) -> io::Result<String> {
        (**self).execute(command)
    }
}
