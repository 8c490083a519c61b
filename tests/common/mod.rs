//! Common test utilities for sysaudit CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working and home directories plus a runner for the binary
//! - Fixtures: Check definition snippets built from portable shell commands

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
