use sysaudit::domain::value_objects::Verdict;
use sysaudit::infrastructure::events::text::{ELEVATION_NOTICE, FIX_FAILED_WARNING};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// `CHECK #<n>: <description>... <VERDICT>` report line
#[derive(Debug, Clone)]
pub struct CheckLine<'a> {
    pub ordinal: usize,
    pub description: &'a str,
    pub verdict: Verdict,
}

impl CheckLine<'_> {
    pub fn render(&self, supports_color: bool) -> String {
        let verdict = match self.verdict {
            Verdict::Passed => ColoredText::success(self.verdict.as_str()),
            Verdict::Failed => ColoredText::error(self.verdict.as_str()),
            Verdict::Skipped => ColoredText::warning(self.verdict.as_str()),
        }
        .bold()
        .render(supports_color);

        format!(
            "CHECK #{}: {}... {}\n",
            self.ordinal, self.description, verdict
        )
    }
}

/// Indented lines shown before a privileged fix runs
pub fn render_elevation_notice(command: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "\t{} {}\n\t{} {}\n",
        Icon::Elevate.colored(supports_color, supports_unicode),
        ColoredText::warning(ELEVATION_NOTICE).render(supports_color),
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim(format!("Command: '{command}'")).render(supports_color)
    )
}

pub fn render_fix_failed(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "\t{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::error(FIX_FAILED_WARNING)
            .bold()
            .render(supports_color)
    )
}
