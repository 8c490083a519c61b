use std::path::Path;

use sysaudit::AuditOptions;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_run_header(
    checks: &Path,
    options: &AuditOptions,
    log_file: Option<&Path>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Audit, "sysaudit run");
    header.add("Checks", checks.display().to_string());

    let mode = if options.report_only {
        "report only"
    } else if options.prompt {
        "interactive fixes"
    } else {
        "automatic fixes (confidence defaults)"
    };
    header.add("Mode", mode);

    if options.skip_privileged {
        header.add("Privileged tests", "skipped");
    }
    if let Some(log) = log_file {
        header.add("Log", log.display().to_string());
    }

    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');
    out
}

pub fn render_log_written(path: &Path) -> String {
    format!("Wrote results to '{}'.\n", path.display())
}
