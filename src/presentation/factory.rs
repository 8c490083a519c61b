//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use std::path::{Path, PathBuf};

use crate::application::AuditUseCase;
use crate::config::Settings;
use crate::infrastructure::{FsCheckRepository, ShellCommandRunner, DEFAULT_CHECKS_FILE};

/// Audit use case backed by the filesystem and `sh`
pub type ConcreteAuditUseCase = AuditUseCase<FsCheckRepository, ShellCommandRunner>;

/// Definition file to use: the CLI value, then settings, then `./sysaudit.json`.
pub fn checks_path(cli: Option<&Path>, settings: &Settings) -> PathBuf {
    cli.map(Path::to_path_buf)
        .or_else(|| settings.run.checks_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHECKS_FILE))
}

/// Create an audit use case reading checks from `path`
pub fn create_audit_use_case(path: impl Into<PathBuf>) -> ConcreteAuditUseCase {
    AuditUseCase::new(FsCheckRepository::new(path), ShellCommandRunner::new())
}
