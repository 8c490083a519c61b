//! Confirmer implementations
//!
//! - `InteractiveConfirmer`: dialoguer prompt on the terminal
//! - `LineConfirmer`: line-based yes/no over any reader and writer

mod interactive;
mod line;

pub use interactive::InteractiveConfirmer;
pub use line::{parse_answer, LineConfirmer};
