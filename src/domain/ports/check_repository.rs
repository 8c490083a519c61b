//! CheckRepository port - abstraction for loading check definitions

use std::path::Path;

use crate::domain::entities::Check;
use crate::domain::value_objects::ConfigWarning;
use crate::error::AuditResult;

/// Validated check definitions plus non-fatal decoding warnings
#[derive(Debug, Clone, Default)]
pub struct LoadedChecks {
    pub checks: Vec<Check>,
    pub warnings: Vec<ConfigWarning>,
}

/// Abstract source of check definitions.
///
/// Any schema or invariant violation is an error: no check may run from a
/// partially valid definition set.
pub trait CheckRepository {
    fn load(&self) -> AuditResult<LoadedChecks>;

    /// File the definitions come from, when there is one
    fn source(&self) -> Option<&Path> {
        None
    }
}
