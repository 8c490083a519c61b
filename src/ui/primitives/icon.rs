use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Elevate,
    Audit,
    List,
    Validate,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Elevate) => theme::icons::ELEVATE,
            (true, Icon::Audit) => theme::icons::AUDIT,
            (true, Icon::List) => theme::icons::LIST,
            (true, Icon::Validate) => theme::icons::VALIDATE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Elevate) => theme::icons_ascii::ELEVATE,
            (false, Icon::Audit) => theme::icons_ascii::AUDIT,
            (false, Icon::List) => theme::icons_ascii::LIST,
            (false, Icon::Validate) => theme::icons_ascii::VALIDATE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Elevate => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Audit | Icon::List | Icon::Validate => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
