//! Settings module for sysaudit
//!
//! Settings hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SYSAUDIT_*)
//! 3. `--settings <file>`, else `./sysaudit.toml`, else
//!    `$XDG_CONFIG_HOME/sysaudit/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    discover, parse_with_warnings, with_env_overrides_from, PROJECT_SETTINGS_FILE,
};
pub use types::{ColorMode, OutputSettings, PolicySettings, RunSettings, Settings};
