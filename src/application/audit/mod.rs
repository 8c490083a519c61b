//! Audit Module
//!
//! Orchestrates one audit run over the loaded check definitions.
//!
//! ## Structure
//!
//! - `options` - Run toggles (`AuditOptions`)
//! - `result` - Result types (`AuditReport`, `CheckOutcome`)
//! - `use_case` - Core use case logic (`AuditUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use sysaudit::application::audit::{AuditOptions, AuditUseCase};
//!
//! let use_case = AuditUseCase::new(repository, ShellCommandRunner::new());
//! let report = use_case.execute(&AuditOptions::default())?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::AuditOptions;
pub use result::{AuditReport, CheckOutcome};
pub use use_case::{fix_question, AuditUseCase};
