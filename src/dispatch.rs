// src/dispatch.rs

//! Dependency dispatcher
//!
//! Routes a `(script, executable)` pair to the heuristic that should inspect
//! it, based on the executable's name. Routes form an explicit ordered table
//! evaluated in insertion order; the first match wins, so overlapping
//! substring rules keep a well-defined precedence (an executable named
//! "python-matlab-bridge" goes to the MATLAB route when that route is
//! registered first).
//!
//! When no route matches, the dispatcher emits a warning diagnostic and
//! returns an empty list rather than failing, so provenance capture can
//! continue against toolchains it does not understand. Errors raised inside
//! a heuristic are never intercepted.

use crate::dependency::Dependency;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::Result;
use crate::executable::Executable;
use crate::heuristics::{EnvironmentListingHeuristic, Heuristic, StandardHeuristics};
use crate::listing::PackageLister;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Predicate matched against an executable's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatcher {
    /// Case-insensitive substring match
    Contains(String),
    /// Case-sensitive exact match
    Exact(String),
}

impl NameMatcher {
    /// Case-insensitive substring matcher
    pub fn containing(needle: impl Into<String>) -> Self {
        Self::Contains(needle.into().to_lowercase())
    }

    /// Case-sensitive exact matcher
    pub fn exact(expected: impl Into<String>) -> Self {
        Self::Exact(expected.into())
    }

    /// Check whether this matcher accepts the given executable name
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Contains(needle) => name.to_lowercase().contains(needle.as_str()),
            Self::Exact(expected) => name == expected,
        }
    }
}

struct Route {
    matcher: NameMatcher,
    heuristic: Arc<dyn Heuristic>,
}

/// Routes dependency-finding requests to language heuristics
///
/// Stateless apart from its route table; safe to share across threads. Each
/// call owns its own subprocess handles and local data.
pub struct Dispatcher {
    routes: Vec<Route>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Build the canonical route table
    ///
    /// Precedence order, first match wins:
    /// 1. name contains "matlab" (any case)
    /// 2. name contains "python" (any case)
    /// 3. name contains "simuran" (any case): package listing via `lister`
    /// 4. name equals "NEURON"
    /// 5. name equals "GENESIS"
    /// 6. name equals "R"
    ///
    /// Anything else warns and returns no dependencies.
    pub fn standard(
        heuristics: StandardHeuristics,
        lister: Arc<dyn PackageLister>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self::builder()
            .diagnostics(diagnostics)
            .route_containing("matlab", heuristics.matlab)
            .route_containing("python", heuristics.python)
            .route_containing(
                "simuran",
                Arc::new(EnvironmentListingHeuristic::new(lister)),
            )
            .route_exact("NEURON", heuristics.neuron)
            .route_exact("GENESIS", heuristics.genesis)
            .route_exact("R", heuristics.r)
            .build()
    }

    /// Find the dependencies of `script` when run by `executable`
    ///
    /// The first matching route's heuristic is invoked with the same
    /// `(script, executable)` pair and its result returned verbatim.
    /// Existence and readability of `script` are the heuristic's concern,
    /// not the dispatcher's.
    pub fn find_dependencies(
        &self,
        script: &Path,
        executable: &Executable,
    ) -> Result<Vec<Dependency>> {
        for route in &self.routes {
            if route.matcher.matches(&executable.name) {
                debug!(
                    "Dispatching {} to the {} heuristic",
                    executable.name,
                    route.heuristic.language()
                );
                return route.heuristic.find_dependencies(script, executable);
            }
        }

        self.diagnostics.emit(Diagnostic::warning(format!(
            "find_dependencies() not yet implemented for {}",
            executable.name
        )));
        Ok(Vec::new())
    }
}

/// Builder for a `Dispatcher` route table
pub struct DispatcherBuilder {
    routes: Vec<Route>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            diagnostics: Arc::new(TracingSink::new()),
        }
    }

    /// Replace the default tracing-backed diagnostics sink
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Append a case-insensitive substring route
    pub fn route_containing(
        mut self,
        needle: impl Into<String>,
        heuristic: Arc<dyn Heuristic>,
    ) -> Self {
        self.routes.push(Route {
            matcher: NameMatcher::containing(needle),
            heuristic,
        });
        self
    }

    /// Append a case-sensitive exact-name route
    pub fn route_exact(
        mut self,
        expected: impl Into<String>,
        heuristic: Arc<dyn Heuristic>,
    ) -> Self {
        self.routes.push(Route {
            matcher: NameMatcher::exact(expected),
            heuristic,
        });
        self
    }

    pub fn build(self) -> Dispatcher {
        Dispatcher {
            routes: self.routes,
            diagnostics: self.diagnostics,
        }
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_case_insensitive() {
        let matcher = NameMatcher::containing("matlab");
        assert!(matcher.matches("MATLAB"));
        assert!(matcher.matches("Matlab R2023b"));
        assert!(matcher.matches("python-matlab-bridge"));
        assert!(!matcher.matches("octave"));
    }

    #[test]
    fn test_exact_is_case_sensitive() {
        let matcher = NameMatcher::exact("NEURON");
        assert!(matcher.matches("NEURON"));
        assert!(!matcher.matches("neuron"));
        assert!(!matcher.matches("NEURON 7.8"));
    }

    #[test]
    fn test_fallthrough_warns_and_returns_empty() {
        let sink = Arc::new(crate::CollectingSink::new());
        let dispatcher = Dispatcher::builder().diagnostics(sink.clone()).build();

        let deps = dispatcher
            .find_dependencies(Path::new("main.oct"), &Executable::new("Octave"))
            .unwrap();

        assert!(deps.is_empty());
        let warnings = sink.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0],
            "find_dependencies() not yet implemented for Octave"
        );
    }
}
