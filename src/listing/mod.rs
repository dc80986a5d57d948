// src/listing/mod.rs

//! Package-listing capability
//!
//! Wraps "ask the package manager what is installed" behind a trait so the
//! subprocess call can be mocked out, and parses the columnar listing format
//! that pip-style tools emit:
//!
//! ```text
//! Package    Version    Location
//! ---------- ---------- ----------
//! numpy      1.21.0
//! requests   2.26.0     /custom/path
//! ```
//!
//! The third column is optional; when absent, the installation source
//! defaults to the path the lister reports for the environment's standard
//! package directory.

mod pip;

pub use pip::{PipLister, is_pip_available};

use crate::dependency::Dependency;
use crate::error::Result;
use tracing::warn;

/// Enumerates the packages installed in an interpreter environment
pub trait PackageLister: Send + Sync {
    /// Raw columnar listing output: a header line, a separator line, then
    /// one `name version [source]` line per package
    fn list_packages(&self) -> Result<String>;

    /// Install path to assume for lines without a source column
    fn default_source(&self) -> Result<String>;
}

/// Parse columnar listing output into dependency records
///
/// The first two lines (header and separator rule) are discarded. Each
/// remaining line is whitespace-split: token 0 is the package name, token 1
/// the version; a third token, when present, is the install source,
/// otherwise the lister's `default_source()` is used (queried lazily, at
/// most once). Lines with fewer than two tokens are malformed; they are
/// logged and skipped rather than failing the whole listing.
pub fn parse_listing(output: &str, lister: &dyn PackageLister) -> Result<Vec<Dependency>> {
    let mut dependencies = Vec::new();
    let mut default_source: Option<String> = None;

    for line in output.trim().lines().skip(2) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            warn!("Skipping malformed package listing line: {:?}", line);
            continue;
        }

        let source = if fields.len() == 3 {
            fields[2].to_string()
        } else {
            match &default_source {
                Some(source) => source.clone(),
                None => {
                    let source = lister.default_source()?;
                    default_source = Some(source.clone());
                    source
                }
            }
        };

        dependencies.push(Dependency::new(fields[0], source, fields[1]));
    }

    Ok(dependencies)
}
