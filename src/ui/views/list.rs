use std::path::Path;

use sysaudit::domain::value_objects::Confidence;
use sysaudit::Check;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_list_header(checks: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::List, "sysaudit list");
    header.add("Checks", checks.display().to_string());
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');
    out
}

/// Names of the remediation paths a check offers
pub fn available_fixes(check: &Check) -> Vec<&'static str> {
    let fix = check.fix();
    let mut fixes = Vec::new();
    if fix.command.is_some() {
        fixes.push("command");
    }
    if fix.sudo_command.is_some() {
        fixes.push("sudo");
    }
    if fix.manual.is_some() {
        fixes.push("manual");
    }
    fixes
}

pub fn render_check_list(checks: &[Check], supports_color: bool) -> String {
    let mut out = String::new();

    for (i, check) in checks.iter().enumerate() {
        let confidence = format!("{:<12}", check.confidence().as_str());
        let confidence = match check.confidence() {
            Confidence::Required => ColoredText::error(confidence),
            Confidence::Recommended => ColoredText::warning(confidence),
            Confidence::Experimental => ColoredText::info(confidence),
        }
        .render(supports_color);

        out.push_str(&format!(
            "{:>4}  {} {}\n",
            format!("#{}", i + 1),
            confidence,
            check.description()
        ));

        let fixes = available_fixes(check);
        let fixes = if fixes.is_empty() {
            "none".to_string()
        } else {
            fixes.join(", ")
        };
        let tests = check.tests().len();
        let privileged = check
            .tests()
            .iter()
            .filter(|t| t.requires_privilege())
            .count();

        let mut detail = format!(
            "tests: {tests}{}  fixes: {fixes}",
            if privileged > 0 {
                format!(" ({privileged} privileged)")
            } else {
                String::new()
            }
        );
        detail.insert_str(0, "      ");
        out.push_str(&ColoredText::dim(detail).render(supports_color));
        out.push('\n');
    }

    if checks.is_empty() {
        out.push_str("No checks defined.\n");
    }

    out
}
