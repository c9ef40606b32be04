//! Index of the packages installed in one Python environment.

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{PackageRecord, Provenance, normalize_name};
use crate::paths::{EnvironmentError, PythonEnvironment};
use crate::ports::DistributionSourcePort;

/// Normalized package name → record, for one environment.
pub type PackageMap = BTreeMap<String, PackageRecord>;

/// Lookup of import names exposed by packages installed in an environment.
///
/// The environment is enumerated at most once, on first access, and the
/// result is kept unchanged for the remainder of the index's life. The lazy
/// cache is not thread-safe; an index shared between threads must have its
/// first access serialized by the caller.
pub struct EnvironmentPackageIndex {
    source: Arc<dyn DistributionSourcePort>,
    environment: PythonEnvironment,
    packages: OnceCell<PackageMap>,
}

impl EnvironmentPackageIndex {
    /// Index the virtualenv at `venv_path`, or the ambient environment when `None`.
    ///
    /// An explicit path is validated immediately and rejected unless it is a
    /// virtualenv.
    pub fn new(
        source: Arc<dyn DistributionSourcePort>,
        venv_path: Option<&Path>,
    ) -> Result<Self, EnvironmentError> {
        let environment = PythonEnvironment::from_venv_path(venv_path)?;
        Ok(Self::with_environment(source, environment))
    }

    /// Index an already selected environment.
    pub const fn with_environment(
        source: Arc<dyn DistributionSourcePort>,
        environment: PythonEnvironment,
    ) -> Self {
        Self {
            source,
            environment,
            packages: OnceCell::new(),
        }
    }

    pub const fn environment(&self) -> &PythonEnvironment {
        &self.environment
    }

    /// All packages in the environment that provide at least one import name.
    ///
    /// The first call enumerates the environment; later calls return the
    /// same cached map.
    pub fn packages(&self) -> &PackageMap {
        self.packages.get_or_init(|| self.build())
    }

    /// Find the package record for `name`, compared in normalized form.
    ///
    /// Returns `None` when the package is not installed or when no import
    /// names could be determined for it. What to do then is up to the caller.
    pub fn lookup(&self, name: &str) -> Option<&PackageRecord> {
        self.packages().get(&normalize_name(name))
    }

    fn build(&self) -> PackageMap {
        let search_path = self.environment.search_path();
        let mut packages = PackageMap::new();
        let mut skipped = 0_usize;

        for dist in self.source.distributions(&search_path) {
            if dist.top_level.is_empty() {
                tracing::debug!(
                    package = %dist.name,
                    location = %dist.location.display(),
                    "Distribution provides no import names"
                );
                skipped += 1;
                continue;
            }

            let record = PackageRecord::with_mapping(
                dist.name,
                Provenance::EnvironmentDiscovered,
                dist.top_level.into_names(),
            );
            if let Some(previous) = packages.insert(record.normalized_name(), record) {
                tracing::debug!(
                    package = %previous.name(),
                    "Distribution shadowed by a later search path entry"
                );
            }
        }

        tracing::debug!(
            environment = %self.environment,
            search_path_entries = search_path.len(),
            packages = packages.len(),
            skipped,
            "Built package index"
        );
        packages
    }
}
