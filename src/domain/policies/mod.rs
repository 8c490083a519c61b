//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain values.

mod confidence;

pub use confidence::ConfidencePolicy;
