use std::path::Path;

use sysaudit::ConfigWarning;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_validate_header(checks: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Validate, "sysaudit validate");
    header.add("Checks", checks.display().to_string());
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');
    out
}

pub fn render_validation(
    check_count: usize,
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if !warnings.is_empty() {
        out.push_str(
            &WarningBlock::from_config_warnings(warnings).render(supports_color, supports_unicode),
        );
        out.push('\n');
    }

    let noun = if check_count == 1 { "check" } else { "checks" };
    out.push_str(&format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(format!("{check_count} {noun} valid"))
            .bold()
            .render(supports_color)
    ));
    out
}
