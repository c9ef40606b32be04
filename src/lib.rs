//! # depmap
//!
//! Maps declared Python dependencies to the import names they provide.
//!
//! This package is the composition root: it wires the on-disk metadata
//! reader from `depmap_metadata` into the resolver from `depmap_core`.
//! Code that needs a different metadata source (or a mock) should use
//! `depmap_core` directly.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let resolved = depmap::resolve_dependencies(["PyYAML", "requests"], Some(Path::new(".venv")))?;
//! for (dep, package) in &resolved {
//!     println!("{dep}: {:?}", package.import_names());
//! }
//! # Ok::<(), depmap::EnvironmentError>(())
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

use std::path::Path;
use std::sync::Arc;

// Dev-dependencies used only by the integration tests.
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tracing_subscriber as _;

// =============================================================================
// Workspace Crate Re-exports
// =============================================================================

pub use depmap_core::{
    DependencyResolver, DiscoveredDistribution, DistributionSourcePort, EnvironmentError,
    EnvironmentPackageIndex, PackageRecord, Provenance, PythonEnvironment, ResolvedDependencies,
    SearchPath, TopLevelNames, normalize_name,
};
pub use depmap_metadata::SitePackagesSource;

/// Re-export of depmap-core for access to the full module tree.
pub mod core_types {
    pub use depmap_core::*;
}

/// Index the packages installed in `venv_path` (or the ambient environment
/// when `None`) using installed distribution metadata.
pub fn package_index(venv_path: Option<&Path>) -> Result<EnvironmentPackageIndex, EnvironmentError> {
    EnvironmentPackageIndex::new(Arc::new(SitePackagesSource::new()), venv_path)
}

/// Associate dependencies with the packages that provide them.
///
/// Looks every dependency up among the distributions installed in the
/// virtualenv at `venv_path`, or in the ambient environment when `venv_path`
/// is `None`. Dependencies that cannot be found get an identity mapping.
///
/// Returns a map from dependency name (first spelling seen) to its
/// resolved package, in declaration order. Fails only if `venv_path` is not
/// a virtualenv.
pub fn resolve_dependencies<I, S>(
    dep_names: I,
    venv_path: Option<&Path>,
) -> Result<ResolvedDependencies, EnvironmentError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let resolver = DependencyResolver::from_index(package_index(venv_path)?);
    tracing::debug!(environment = %resolver.index().environment(), "Resolving dependencies");
    Ok(resolver.resolve(dep_names))
}
