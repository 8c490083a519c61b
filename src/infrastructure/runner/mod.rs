//! Command runner implementations

mod shell;

pub use shell::ShellCommandRunner;
