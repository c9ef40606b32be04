//! Core domain types, ports and services for mapping declared Python
//! dependencies to the import names they make available.
//!
//! The install-time name of a package (`pip install PyYAML`) and the name it
//! is imported by (`import yaml`) are spelled independently. This crate
//! reconciles the two, authoritatively from installed metadata where it can
//! and with an identity guess where it cannot.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{PackageRecord, Provenance, normalize_name};
pub use paths::{EnvironmentError, PythonEnvironment, SearchPath, VENV_MARKER_FILE};
pub use ports::{
    DiscoveredDistribution, DistributionSourcePort, NoopDistributionSource, TopLevelNames,
};
pub use services::{
    DependencyResolver, EnvironmentPackageIndex, PackageMap, ResolvedDependencies,
};
