// src/dependency.rs

//! Detected dependency records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A software component detected in a script's run-time environment
///
/// Records are produced by heuristics and never mutated afterwards. A result
/// sequence preserves the order in which the underlying heuristic discovered
/// the dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package or module name
    pub name: String,
    /// Where the dependency is installed (path or origin)
    pub source: String,
    /// Version string as reported by the environment
    pub version: String,
}

impl Dependency {
    /// Create a new dependency record
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.version, self.source)
    }
}
