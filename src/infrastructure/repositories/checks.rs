//! File System Check Repository
//!
//! Loads check definitions from a JSON or TOML file.

use std::path::{Path, PathBuf};

use crate::domain::ports::{CheckRepository, LoadedChecks};
use crate::error::{AuditError, AuditResult};

use super::definitions::{parse_definitions, DefinitionFormat};

/// Default definition file, looked up in the working directory
pub const DEFAULT_CHECKS_FILE: &str = "sysaudit.json";

/// Check repository backed by one definition file
pub struct FsCheckRepository {
    path: PathBuf,
}

impl FsCheckRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FsCheckRepository {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKS_FILE)
    }
}

impl CheckRepository for FsCheckRepository {
    fn load(&self) -> AuditResult<LoadedChecks> {
        let format = DefinitionFormat::from_path(&self.path)?;
        if !self.path.exists() {
            return Err(AuditError::DefinitionsNotFound {
                path: self.path.clone(),
            });
        }

        let content = std::fs::read_to_string(&self.path)?;
        let loaded = parse_definitions(&content, format, &self.path)?;
        tracing::info!(
            path = %self.path.display(),
            checks = loaded.checks.len(),
            warnings = loaded.warnings.len(),
            "loaded check definitions"
        );
        Ok(loaded)
    }

    fn source(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
