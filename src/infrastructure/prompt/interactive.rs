//! Interactive Confirmer
//!
//! Prompts on the terminal with dialoguer.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Confirm;

use crate::domain::ports::Confirmer;

/// Terminal confirmer; needs an attended TTY.
///
/// Falls back to the default answer if the terminal cannot be read.
pub struct InteractiveConfirmer {
    color: bool,
}

impl InteractiveConfirmer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn ask(&self, theme: &dyn Theme, question: &str, default: bool) -> bool {
        let answer = Confirm::with_theme(theme)
            .with_prompt(question)
            .default(default)
            .wait_for_newline(true)
            .interact_opt();

        match answer {
            Ok(Some(answer)) => answer,
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(error = %e, "prompt failed, using default answer");
                default
            }
        }
    }
}

impl Confirmer for InteractiveConfirmer {
    fn confirm(&self, question: &str, default: bool) -> bool {
        if self.color {
            self.ask(&ColorfulTheme::default(), question, default)
        } else {
            self.ask(&SimpleTheme, question, default)
        }
    }
}
