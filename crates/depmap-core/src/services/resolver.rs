//! Dependency resolver - maps declared dependency names to package records.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::domain::{PackageRecord, normalize_name};
use crate::paths::EnvironmentError;
use crate::ports::DistributionSourcePort;

use super::package_index::EnvironmentPackageIndex;

/// Declared dependency name (first-seen spelling) → resolved package record,
/// in declaration order.
pub type ResolvedDependencies = IndexMap<String, PackageRecord>;

/// Associates declared dependencies with the import names they provide.
///
/// Packages found in the environment are reported as-is. Anything else gets
/// an identity mapping: a pseudo-package whose import name is the
/// normalized dependency name. Resolution itself never fails; only choosing
/// an invalid environment does.
pub struct DependencyResolver {
    index: EnvironmentPackageIndex,
}

impl DependencyResolver {
    /// Resolve against the virtualenv at `venv_path`, or the ambient
    /// environment when `None`.
    pub fn new(
        source: Arc<dyn DistributionSourcePort>,
        venv_path: Option<&Path>,
    ) -> Result<Self, EnvironmentError> {
        EnvironmentPackageIndex::new(source, venv_path).map(Self::from_index)
    }

    pub const fn from_index(index: EnvironmentPackageIndex) -> Self {
        Self { index }
    }

    pub const fn index(&self) -> &EnvironmentPackageIndex {
        &self.index
    }

    /// Resolve every distinct dependency in `dep_names`.
    ///
    /// Names that normalize to the same package collapse into one entry keyed
    /// by the first spelling seen. The result is the same on every call.
    pub fn resolve<I, S>(&self, dep_names: I) -> ResolvedDependencies
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = ResolvedDependencies::new();
        let mut seen = HashSet::new();

        for name in dep_names {
            let name = name.as_ref();
            if !seen.insert(normalize_name(name)) {
                continue;
            }
            let package = self
                .index
                .lookup(name)
                .cloned()
                .unwrap_or_else(|| self.identity_fallback(name));
            resolved.insert(name.to_string(), package);
        }

        resolved
    }

    fn identity_fallback(&self, name: &str) -> PackageRecord {
        let package = PackageRecord::identity_mapping(name);
        let imports = package
            .import_names()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(
            dependency = name,
            imports = %imports,
            "Could not find {name:?} in {}. Assuming it can be imported as {imports}",
            self.index.environment()
        );
        package
    }
}
