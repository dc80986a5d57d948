// src/heuristics/environment.rs

//! Environment-listing heuristic
//!
//! Reports every package installed in the interpreter environment, without
//! looking at the script at all. Coarser than an import walker, but exact
//! about versions, and the right answer for toolchains that load their whole
//! environment at startup.

use super::Heuristic;
use crate::dependency::Dependency;
use crate::error::Result;
use crate::executable::Executable;
use crate::listing::{PackageLister, parse_listing};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Lists the interpreter environment via a `PackageLister`
pub struct EnvironmentListingHeuristic {
    lister: Arc<dyn PackageLister>,
}

impl EnvironmentListingHeuristic {
    pub fn new(lister: Arc<dyn PackageLister>) -> Self {
        Self { lister }
    }
}

impl Heuristic for EnvironmentListingHeuristic {
    fn language(&self) -> &'static str {
        "environment"
    }

    fn find_dependencies(
        &self,
        _script: &Path,
        executable: &Executable,
    ) -> Result<Vec<Dependency>> {
        debug!("Listing installed packages for {}", executable.name);
        let output = self.lister.list_packages()?;
        parse_listing(&output, self.lister.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct FixedLister {
        output: &'static str,
    }

    impl PackageLister for FixedLister {
        fn list_packages(&self) -> Result<String> {
            Ok(self.output.to_string())
        }

        fn default_source(&self) -> Result<String> {
            Ok("/usr/lib/python3/site-packages".to_string())
        }
    }

    struct FailingLister;

    impl PackageLister for FailingLister {
        fn list_packages(&self) -> Result<String> {
            Err(Error::CommandFailed {
                command: "pip list".to_string(),
                stderr: "boom".to_string(),
            })
        }

        fn default_source(&self) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_reports_environment_packages() {
        let heuristic = EnvironmentListingHeuristic::new(Arc::new(FixedLister {
            output: "Package Version\n------- -------\nnumpy 1.21.0\n",
        }));

        let deps = heuristic
            .find_dependencies(Path::new("sim.py"), &Executable::new("SimuRAN"))
            .unwrap();

        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "numpy");
        assert_eq!(deps[0].version, "1.21.0");
        assert_eq!(deps[0].source, "/usr/lib/python3/site-packages");
    }

    #[test]
    fn test_lister_failure_propagates() {
        let heuristic = EnvironmentListingHeuristic::new(Arc::new(FailingLister));
        let result =
            heuristic.find_dependencies(Path::new("sim.py"), &Executable::new("SimuRAN"));
        assert!(matches!(result, Err(Error::CommandFailed { .. })));
    }
}
