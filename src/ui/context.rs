use sysaudit::config::{ColorMode, Settings};
use sysaudit::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, settings: &Settings) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, cli_color, settings, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        settings: &Settings,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = settings.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match settings.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            caps,
            color,
            unicode,
        }
    }

    /// Whether fix prompts can be shown with a terminal widget
    pub fn interactive(&self) -> bool {
        !self.json && self.caps.is_tty && self.caps.stdin_tty
    }
}
