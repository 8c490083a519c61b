use std::sync::OnceLock;

use regex::Regex;
use sysaudit::domain::ports::ManualFixEntry;
use sysaudit::infrastructure::events::text::{manual_fix_header, SEPARATOR};

use crate::ui::primitives::text::ColoredText;

fn url_pattern() -> Option<&'static Regex> {
    static URL: OnceLock<Option<Regex>> = OnceLock::new();
    URL.get_or_init(|| Regex::new(r"(?i)https?://[^\s]+").ok())
        .as_ref()
}

/// Underline every http(s) link in `text`
pub fn underline_links(text: &str, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    let Some(re) = url_pattern() else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &regex::Captures<'_>| {
        ColoredText::info(&caps[0]).underline().render(true)
    })
    .into_owned()
}

/// End-of-run list of checks needing manual remediation
#[derive(Debug, Clone)]
pub struct ManualFixBlock<'a> {
    entries: &'a [ManualFixEntry],
}

impl<'a> ManualFixBlock<'a> {
    pub fn new(entries: &'a [ManualFixEntry]) -> Self {
        Self { entries }
    }

    pub fn render(&self, supports_color: bool) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let rule = ColoredText::warning(SEPARATOR).render(supports_color);
        let mut out = format!("{rule}\n");
        out.push_str(
            &ColoredText::warning(manual_fix_header(self.entries.len()))
                .bold()
                .render(supports_color),
        );
        out.push('\n');

        for entry in self.entries {
            let title = format!("CHECK #{}: {}", entry.ordinal, entry.description);
            out.push_str(&ColoredText::plain(title).bold().render(supports_color));
            out.push('\n');
            out.push_str(&underline_links(&entry.instructions, supports_color));
            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
        }
        out
    }
}
