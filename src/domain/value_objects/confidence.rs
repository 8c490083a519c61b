//! Confidence Value Object
//!
//! Likelihood that applying a configuration fix creates negative side-effects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Confidence level of a check.
///
/// Ordered from strongest to weakest: `Required < Recommended < Experimental`.
/// A "smaller" confidence means the fix is less likely to break applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Always warn, always fix by default
    Required,
    /// Safe for most systems
    Recommended,
    /// May interfere with some workflows
    Experimental,
}

impl Confidence {
    pub const ALL: [Confidence; 3] = [
        Confidence::Required,
        Confidence::Recommended,
        Confidence::Experimental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Required => "required",
            Confidence::Recommended => "recommended",
            Confidence::Experimental => "experimental",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "required" => Ok(Confidence::Required),
            "recommended" => Ok(Confidence::Recommended),
            "experimental" => Ok(Confidence::Experimental),
            other => Err(format!(
                "unknown confidence '{}' (expected required, recommended or experimental)",
                other
            )),
        }
    }
}
