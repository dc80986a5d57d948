// src/lib.rs

//! Depscan: dependency version detection for provenance tracking
//!
//! Given a script and a descriptor of the executable that will run it,
//! depscan determines which language-specific heuristic should inspect the
//! script and its run-time environment, and returns the dependencies it
//! finds (name, install source, version).
//!
//! # Architecture
//!
//! - Dispatcher: an ordered route table matching on the executable's name;
//!   the first matching route wins
//! - Heuristics: language walkers behind the `Heuristic` trait, wired in by
//!   the embedding application
//! - Listing: the `PackageLister` capability, which shells out to a package
//!   manager and parses its columnar output
//! - Diagnostics: an injected sink for non-fatal warnings, kept out of the
//!   return value so callers can collect or drop them

pub mod dependency;
pub mod diagnostics;
pub mod dispatch;
mod error;
pub mod executable;
pub mod heuristics;
pub mod listing;

pub use dependency::Dependency;
pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticSink, Severity, SilentSink, TracingSink,
};
pub use dispatch::{Dispatcher, DispatcherBuilder, NameMatcher};
pub use error::{Error, Result};
pub use executable::Executable;
pub use heuristics::{
    EnvironmentListingHeuristic, Heuristic, StandardHeuristics, UnavailableHeuristic,
};
pub use listing::{PackageLister, PipLister, parse_listing};
