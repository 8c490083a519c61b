//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AuditUseCase` - Evaluates, gates and remediates every check, then tallies

pub mod audit;

pub use audit::{fix_question, AuditOptions, AuditReport, AuditUseCase, CheckOutcome};
