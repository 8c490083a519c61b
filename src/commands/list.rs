use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use sysaudit::domain::ports::CheckRepository;
use sysaudit::infrastructure::FsCheckRepository;
use sysaudit::presentation::{checks_path, ColorWhen};

use super::{load_settings, EXIT_CLEAN};
use crate::ui::context::UiContext;
use crate::ui::views::list::{available_fixes, render_check_list, render_list_header};

pub fn cmd_list(
    checks: Option<PathBuf>,
    json: bool,
    color: Option<ColorWhen>,
    settings_path: Option<&Path>,
) -> Result<ExitCode> {
    let (settings, _) = load_settings(settings_path)?;
    let ui = UiContext::new(json, color, &settings);
    let path = checks_path(checks.as_deref(), &settings);

    let loaded = FsCheckRepository::new(&path).load()?;

    if json {
        let mut out = std::io::stdout().lock();
        for (i, check) in loaded.checks.iter().enumerate() {
            crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "check",
                    "command": "list",
                    "ordinal": i + 1,
                    "description": check.description(),
                    "confidence": check.confidence(),
                    "tests": check.tests().len(),
                    "fixes": available_fixes(check),
                }),
            )?;
        }
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "list",
                "check_count": loaded.checks.len(),
            }),
        )?;
    } else {
        print!("{}", render_list_header(&path, ui.color, ui.unicode));
        print!("{}", render_check_list(&loaded.checks, ui.color));
    }

    Ok(ExitCode::from(EXIT_CLEAN))
}
