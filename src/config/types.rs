//! Settings type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::AuditOptions;
use crate::domain::policies::ConfidencePolicy;
use crate::domain::value_objects::ConfigWarning;
use crate::error::AuditResult;

use super::loader;

fn default_true() -> bool {
    true
}

/// `[run]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSettings {
    /// Evaluate only, never fix
    #[serde(default)]
    pub report_only: bool,

    /// Ask before applying each fix
    #[serde(default = "default_true")]
    pub prompt: bool,

    #[serde(default)]
    pub skip_privileged: bool,

    #[serde(default = "default_true")]
    pub write_log: bool,

    /// Defaults to `~/Documents`
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Defaults to `sysaudit.json` in the working directory
    #[serde(default)]
    pub checks_file: Option<PathBuf>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            report_only: false,
            prompt: true,
            skip_privileged: false,
            write_log: true,
            log_dir: None,
            checks_file: None,
        }
    }
}

/// `[policy]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySettings {
    #[serde(default = "default_true")]
    pub warn_recommended: bool,

    #[serde(default = "default_true")]
    pub warn_experimental: bool,

    #[serde(default = "default_true")]
    pub fix_recommended_by_default: bool,

    #[serde(default)]
    pub fix_experimental_by_default: bool,
}

impl Default for PolicySettings {
    fn default() -> Self {
        let policy = ConfidencePolicy::default();
        Self {
            warn_recommended: policy.warn_recommended,
            warn_experimental: policy.warn_experimental,
            fix_recommended_by_default: policy.fix_recommended_by_default,
            fix_experimental_by_default: policy.fix_experimental_by_default,
        }
    }
}

impl From<&PolicySettings> for ConfidencePolicy {
    fn from(settings: &PolicySettings) -> Self {
        Self {
            warn_recommended: settings.warn_recommended,
            warn_experimental: settings.warn_experimental,
            fix_recommended_by_default: settings.fix_recommended_by_default,
            fix_experimental_by_default: settings.fix_experimental_by_default,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Run settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub run: RunSettings,

    #[serde(default)]
    pub policy: PolicySettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> AuditResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AuditResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, else the first discovered one, else defaults;
    /// then apply `SYSAUDIT_*` overrides.
    pub fn resolve(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> AuditResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, cwd)
    }

    /// Apply environment variable overrides (SYSAUDIT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn policy(&self) -> ConfidencePolicy {
        ConfidencePolicy::from(&self.policy)
    }

    pub fn audit_options(&self) -> AuditOptions {
        AuditOptions::new()
            .with_report_only(self.run.report_only)
            .with_prompt(self.run.prompt)
            .with_skip_privileged(self.run.skip_privileged)
            .with_policy(self.policy())
    }
}
