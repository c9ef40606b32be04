//! Core services - the resolution logic layer.
//!
//! Services here orchestrate between ports (trait interfaces) and domain
//! logic. They don't know about concrete metadata readers.

mod package_index;
mod resolver;

pub use package_index::{EnvironmentPackageIndex, PackageMap};
pub use resolver::{DependencyResolver, ResolvedDependencies};
