//! Subcommand implementations.
//!
//! Each command returns the process exit status; configuration errors
//! propagate as `anyhow::Error` and are rendered by `main`.

mod list;
mod run;
mod validate;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use sysaudit::{ConfigWarning, Settings};

pub use list::cmd_list;
pub use run::{cmd_run, RunArgs};
pub use validate::cmd_validate;

/// Every check passed or was brought into compliance
pub const EXIT_CLEAN: u8 = 0;
/// At least one check ended failed, skipped or declined
pub const EXIT_UNRESOLVED: u8 = 1;
/// Settings or check definitions could not be loaded
pub const EXIT_CONFIG: u8 = 2;

pub fn exit_code(clean: bool) -> ExitCode {
    ExitCode::from(if clean { EXIT_CLEAN } else { EXIT_UNRESOLVED })
}

/// Settings from `--settings` or discovery, with `SYSAUDIT_*` overrides applied
pub fn load_settings(explicit: Option<&Path>) -> Result<(Settings, Vec<ConfigWarning>)> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (settings, warnings) = Settings::resolve(explicit, &cwd)?;
    for warning in &warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            suggestion = warning.suggestion.as_deref().unwrap_or(""),
            "unknown settings key"
        );
    }
    Ok((settings, warnings))
}
