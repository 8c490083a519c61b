//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `runner/` - Shell command runner
//! - `prompt/` - Confirmers (dialoguer, line-based)
//! - `events/` - Event sinks (NDJSON, run log, fanout)
//! - `repositories/` - Check definition loading (JSON, TOML)
//! - `logging` - tracing subscriber setup

pub mod events;
pub mod logging;
pub mod prompt;
pub mod repositories;
pub mod runner;

// Re-export for convenience
pub use events::{FanoutEventSink, JsonEventSink, LogFileSink};
pub use prompt::{InteractiveConfirmer, LineConfirmer};
pub use repositories::{FsCheckRepository, DEFAULT_CHECKS_FILE};
pub use runner::ShellCommandRunner;
