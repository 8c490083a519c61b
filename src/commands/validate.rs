use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use sysaudit::domain::ports::CheckRepository;
use sysaudit::infrastructure::FsCheckRepository;
use sysaudit::presentation::{checks_path, ColorWhen};

use super::{load_settings, EXIT_CLEAN};
use crate::ui::context::UiContext;
use crate::ui::views::validate::{render_validate_header, render_validation};

pub fn cmd_validate(
    checks: Option<PathBuf>,
    json: bool,
    color: Option<ColorWhen>,
    settings_path: Option<&Path>,
) -> Result<ExitCode> {
    let (settings, _) = load_settings(settings_path)?;
    let ui = UiContext::new(json, color, &settings);
    let path = checks_path(checks.as_deref(), &settings);

    if !json {
        print!("{}", render_validate_header(&path, ui.color, ui.unicode));
    }

    let loaded = FsCheckRepository::new(&path).load()?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "validate",
            "source": path.display().to_string(),
            "check_count": loaded.checks.len(),
            "warnings": loaded
                .warnings
                .iter()
                .map(crate::ui::blocks::warning::describe)
                .collect::<Vec<_>>(),
            "success": true,
        }))?;
    } else {
        print!(
            "{}",
            render_validation(loaded.checks.len(), &loaded.warnings, ui.color, ui.unicode)
        );
    }

    Ok(ExitCode::from(EXIT_CLEAN))
}
