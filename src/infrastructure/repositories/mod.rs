//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod checks;
pub mod definitions;

pub use checks::{FsCheckRepository, DEFAULT_CHECKS_FILE};
pub use definitions::{parse_definitions, DefinitionFormat};
