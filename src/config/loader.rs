//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{AuditError, AuditResult};

use super::types::{ColorMode, Settings};

/// Settings file looked up in the working directory
pub const PROJECT_SETTINGS_FILE: &str = "sysaudit.toml";

const KNOWN_KEYS: &[&str] = &[
    "run",
    "report_only",
    "prompt",
    "skip_privileged",
    "write_log",
    "log_dir",
    "checks_file",
    "policy",
    "warn_recommended",
    "warn_experimental",
    "fix_recommended_by_default",
    "fix_experimental_by_default",
    "output",
    "color",
    "unicode",
];

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AuditResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse settings text; `path` is only used for messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> AuditResult<(Settings, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AuditError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|key| ConfigWarning::unknown_key(key, path, content, KNOWN_KEYS))
        .collect();

    Ok((settings, warnings))
}

/// First settings file that exists: `./sysaudit.toml`, then the user config
pub fn discover(cwd: &Path) -> Option<PathBuf> {
    let project = cwd.join(PROJECT_SETTINGS_FILE);
    if project.exists() {
        return Some(project);
    }

    let user = dirs_config_dir()?.join("sysaudit/config.toml");
    user.exists().then_some(user)
}

pub fn resolve(
    explicit: Option<&Path>,
    cwd: &Path,
) -> AuditResult<(Settings, Vec<ConfigWarning>)> {
    let path = explicit.map(Path::to_path_buf).or_else(|| discover(cwd));

    let (settings, warnings) = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading settings");
            load_with_warnings(&path)?
        }
        None => (Settings::default(), Vec::new()),
    };

    Ok((with_env_overrides(settings), warnings))
}

/// Apply environment variable overrides (SYSAUDIT_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    with_env_overrides_from(settings, |key| std::env::var(key).ok())
}

/// Apply overrides read through `get_env`
pub fn with_env_overrides_from(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let flag = |key: &str, target: &mut bool| {
        if let Some(value) = get_env(key) {
            match parse_bool(&value) {
                Some(b) => *target = b,
                None => tracing::warn!(key, value = %value, "ignoring invalid boolean"),
            }
        }
    };

    flag("SYSAUDIT_REPORT_ONLY", &mut settings.run.report_only);
    flag("SYSAUDIT_PROMPT", &mut settings.run.prompt);
    flag("SYSAUDIT_SKIP_PRIVILEGED", &mut settings.run.skip_privileged);
    flag("SYSAUDIT_WRITE_LOG", &mut settings.run.write_log);
    flag("SYSAUDIT_WARN_RECOMMENDED", &mut settings.policy.warn_recommended);
    flag("SYSAUDIT_WARN_EXPERIMENTAL", &mut settings.policy.warn_experimental);
    flag(
        "SYSAUDIT_FIX_RECOMMENDED",
        &mut settings.policy.fix_recommended_by_default,
    );
    flag(
        "SYSAUDIT_FIX_EXPERIMENTAL",
        &mut settings.policy.fix_experimental_by_default,
    );
    flag("SYSAUDIT_UNICODE", &mut settings.output.unicode);

    if let Some(dir) = get_env("SYSAUDIT_LOG_DIR").filter(|v| !v.is_empty()) {
        settings.run.log_dir = Some(PathBuf::from(dir));
    }
    if let Some(file) = get_env("SYSAUDIT_CHECKS").filter(|v| !v.is_empty()) {
        settings.run.checks_file = Some(PathBuf::from(file));
    }

    if let Some(color) = get_env("SYSAUDIT_COLOR") {
        settings.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    settings
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}
