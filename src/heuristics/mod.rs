// src/heuristics/mod.rs

//! Language-specific dependency heuristics
//!
//! Each supported language has a heuristic that inspects a script and its
//! run-time environment and reports the dependencies it finds. The walkers
//! that parse import statements and module search paths live in the
//! embedding application; this crate defines the seam they plug into, plus
//! an environment-listing heuristic that works for any toolchain whose
//! package manager can enumerate installed packages.

mod environment;

pub use environment::EnvironmentListingHeuristic;

use crate::dependency::Dependency;
use crate::error::{Error, Result};
use crate::executable::Executable;
use std::path::Path;
use std::sync::Arc;

/// Language-specific dependency detection
///
/// Implementations receive the script path and the executable descriptor
/// untouched from the dispatcher. They decide what "the dependencies of this
/// script" means for their language: parsing imports, walking search paths,
/// or listing the whole environment. Implementations must be thread-safe.
pub trait Heuristic: Send + Sync {
    /// Language or toolchain this heuristic understands, for logs
    fn language(&self) -> &'static str;

    /// Find the dependencies of `script` when run by `executable`
    ///
    /// Returned records keep discovery order. Failures (unreadable script,
    /// missing interpreter, parse errors) surface to the caller unchanged.
    fn find_dependencies(
        &self,
        script: &Path,
        executable: &Executable,
    ) -> Result<Vec<Dependency>>;
}

/// The language delegates behind the canonical dispatch table
///
/// Supplied by the embedding application; see `Dispatcher::standard`.
pub struct StandardHeuristics {
    pub matlab: Arc<dyn Heuristic>,
    pub python: Arc<dyn Heuristic>,
    pub neuron: Arc<dyn Heuristic>,
    pub genesis: Arc<dyn Heuristic>,
    pub r: Arc<dyn Heuristic>,
}

/// Placeholder for a language whose walker is not wired in
///
/// Fails loudly instead of reporting an empty (and therefore wrong)
/// dependency list. Soft degradation is reserved for executables no route
/// recognizes at all.
pub struct UnavailableHeuristic {
    language: &'static str,
}

impl UnavailableHeuristic {
    pub fn new(language: &'static str) -> Self {
        Self { language }
    }
}

impl Heuristic for UnavailableHeuristic {
    fn language(&self) -> &'static str {
        self.language
    }

    fn find_dependencies(
        &self,
        _script: &Path,
        _executable: &Executable,
    ) -> Result<Vec<Dependency>> {
        Err(Error::HeuristicUnavailable {
            language: self.language.to_string(),
        })
    }
}
