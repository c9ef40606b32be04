//! On-disk reader for installed Python distribution metadata.
//!
//! Implements [`depmap_core::DistributionSourcePort`] over the metadata
//! layout pip and setuptools leave in `site-packages`: `*.dist-info` and
//! `*.egg-info` directories holding `METADATA`/`PKG-INFO`, an optional
//! `top_level.txt`, and an installed file list.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod dist;
mod error;
mod files;
mod finder;
mod headers;
mod top_level;

// ============================================================================
// Public API
// ============================================================================

pub use dist::{MetadataDir, MetadataKind};
pub use error::{MetadataError, MetadataResult};
pub use finder::{SitePackagesSource, find_metadata_dirs};
pub use top_level::infer_top_level;
