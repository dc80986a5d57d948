// src/executable.rs

//! Executable descriptors
//!
//! An `Executable` describes the interpreter or tool that will run a script.
//! Dispatch routes on its name alone; path and version are carried along for
//! heuristics that need them (e.g. to query the right interpreter).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Metadata about the interpreter/tool that will run a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Executable {
    /// Tool name, e.g. "Python", "MATLAB", "NEURON"
    pub name: String,
    /// Path to the binary, if known
    pub path: Option<PathBuf>,
    /// Version of the tool, if known
    pub version: Option<String>,
}

impl Executable {
    /// Create a descriptor from a tool name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            version: None,
        }
    }

    /// Attach the path to the binary
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach the tool version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl fmt::Display for Executable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_version() {
        let exe = Executable::new("Python").with_version("3.11.2");
        assert_eq!(exe.to_string(), "Python 3.11.2");
    }

    #[test]
    fn test_display_bare() {
        assert_eq!(Executable::new("NEURON").to_string(), "NEURON");
    }
}
