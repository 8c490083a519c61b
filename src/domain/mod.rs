//! Domain Layer
//!
//! This is the core of sysaudit - check definitions, evaluation and
//! remediation logic without direct I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Check and Test definitions (immutable once built)
//! - `value_objects/` - Confidence, comparison matchers, results, tally
//! - `services/` - Check executor and remediation engine
//! - `policies/` - Confidence policy (warning and prompting defaults)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Commands, prompts and output all go through ports
//! 2. **Immutable definitions** - Checks are validated once and never mutated
//! 3. **Closed outcomes** - Every evaluation yields a `CheckResult` variant

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
