use sysaudit::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed list of non-fatal configuration warnings
#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// One line per warning: location, key and optional suggestion
    pub fn from_config_warnings(warnings: &[ConfigWarning]) -> Self {
        let noun = if warnings.len() == 1 { "key" } else { "keys" };
        let mut block = Self::new(format!("{} unknown {noun} ignored", warnings.len()));
        for w in warnings {
            block.add_line(describe(w));
        }
        block
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title
        );
        let mut b = Box::with_title(header).style(BoxStyle::Warning);
        for line in &self.lines {
            b.add_line(line.clone());
        }
        b.render(supports_color, supports_unicode)
    }
}

/// `file:line: unknown key 'x' (did you mean 'y'?)`
pub fn describe(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut text = format!("{location}: unknown key '{}'", warning.key);
    if let Some(suggestion) = &warning.suggestion {
        text.push_str(&format!(" (did you mean '{suggestion}'?)"));
    }
    text
}
