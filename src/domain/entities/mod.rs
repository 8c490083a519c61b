//! Domain Entities
//!
//! Check definitions. Entities are built once from validated input and are
//! read-only for the rest of the run.

mod check;
mod test;

pub use check::{Check, Fix};
pub use test::{Test, TestBuilder, TestVerdict};

use thiserror::Error;

/// Violation of a check or test invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("check '{description}' has no tests")]
    NoTests { description: String },

    #[error("check description is empty")]
    EmptyDescription,

    #[error("test command is empty")]
    EmptyCommand,

    #[error("test '{command}' has neither a pass nor a fail condition")]
    NoCondition { command: String },

    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}
