//! Event Sink Implementations
//!
//! Provides concrete implementations of AuditEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - LogFileSink: plain-text run log
//! - FanoutEventSink: forwards to several sinks
//!
//! The colored console sink lives with the CLI's UI layer.

mod fanout;
mod json;
mod log_file;
pub mod text;

pub use fanout::FanoutEventSink;
pub use json::JsonEventSink;
pub use log_file::{default_log_dir, log_file_name, strip_ansi, LogFileSink};
