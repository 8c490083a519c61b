//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod audit_events;
pub mod check_repository;
pub mod command_runner;
pub mod confirmer;

#[cfg(test)]
pub(crate) mod fakes;

pub use audit_events::{AuditEvent, AuditEventSink, ManualFixEntry, NoopEventSink};
pub use check_repository::{CheckRepository, LoadedChecks};
pub use command_runner::CommandRunner;
pub use confirmer::{Confirmer, PolicyConfirmer};
