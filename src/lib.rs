//! sysaudit - operating system configuration auditor
//!
//! Reads a list of checks (shell commands plus expected or forbidden
//! output), evaluates each against the live system, and offers a
//! confidence-gated, two-stage fix (unprivileged, then elevated) for the
//! ones that fail. Every run ends with a six-way tally.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuditOptions, AuditReport, AuditUseCase, CheckOutcome};
pub use config::{ConfigWarning, Settings};
pub use domain::entities::{Check, Fix, Test};
pub use domain::policies::ConfidencePolicy;
pub use domain::value_objects::{CheckResult, ComparisonMode, Confidence, Outcome, Tally};
pub use error::{AuditError, AuditResult};
