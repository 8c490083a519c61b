use sysaudit::domain::value_objects::{Outcome, Tally};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed six-bucket tally printed at the end of every run
#[derive(Debug, Clone)]
pub struct TallySummary {
    tally: Tally,
    next_step: Option<String>,
}

impl TallySummary {
    pub fn new(tally: Tally) -> Self {
        Self {
            tally,
            next_step: None,
        }
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let clean = self.tally.is_clean();
        let (style, icon, title) = if clean {
            (BoxStyle::Success, Icon::Success, "Audit complete".to_string())
        } else {
            let unresolved = self.tally.unresolved();
            let noun = if unresolved == 1 { "check" } else { "checks" };
            (
                BoxStyle::Warning,
                Icon::Warning,
                format!("{unresolved} {noun} still misconfigured"),
            )
        };

        let title = if clean {
            ColoredText::success(title)
        } else {
            ColoredText::warning(title)
        }
        .bold()
        .render(supports_color);

        let mut b = Box::with_title(format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title
        ))
        .style(style);
        b.add_empty();

        for row in self.tally.rows() {
            let line = row.to_string();
            let line = match row.outcome {
                _ if row.count == 0 => ColoredText::dim(line),
                Outcome::PassedWithoutFix | Outcome::PassedAfterFix => ColoredText::success(line),
                Outcome::ChecksSkipped => ColoredText::plain(line),
                Outcome::FixFailed | Outcome::FixSkipped | Outcome::FixDeclined => {
                    ColoredText::error(line)
                }
            };
            b.add_line(line.render(supports_color));
        }

        b.add_empty();
        b.add_line(format!("{:<25} {:>3}", "total", self.tally.total()));

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
