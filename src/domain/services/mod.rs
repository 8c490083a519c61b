//! Domain Services
//!
//! Check evaluation and remediation. I/O goes through the domain ports,
//! so both services are testable with in-memory runners.

mod executor;
mod remediation;

pub use executor::{CheckExecutor, Report};
pub use remediation::RemediationEngine;
