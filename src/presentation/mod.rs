//! Presentation Layer
//!
//! - `cli` - Argument parsing (via clap)
//! - `factory` - Creates use cases with their infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use sysaudit::presentation::factory;
//!
//! let use_case = factory::create_audit_use_case("sysaudit.json");
//! let report = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{checks_path, create_audit_use_case, ConcreteAuditUseCase};
