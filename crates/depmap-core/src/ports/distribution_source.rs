//! Distribution source port definition.
//!
//! This port abstracts the enumeration of installed distributions and the
//! import names each one provides, so the index never depends on a
//! particular metadata layout.
//!
//! # Design
//!
//! - One operation: given a search path, list distributions with their
//!   declared or inferred top-level import names
//! - Infallible by contract: unreadable metadata is skipped by the
//!   implementation, never surfaced to the index
//! - The on-disk implementation lives in the `depmap-metadata` crate

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::paths::SearchPath;

/// Top-level import names of a distribution, tagged by how they were found.
///
/// A distribution's names come from exactly one of the two sources. An
/// explicit declaration always wins and the two are never merged: merging
/// could silently grow the set of names that count as "used".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevelNames {
    /// Listed explicitly by the distribution (e.g. `top_level.txt`).
    Declared(BTreeSet<String>),
    /// Derived from the files the distribution installed.
    Inferred(BTreeSet<String>),
}

impl TopLevelNames {
    /// Prefer a non-empty declared list; otherwise run `infer`.
    ///
    /// `infer` is only called when the declared list is absent or empty.
    pub fn declared_or_else<F>(declared: Option<BTreeSet<String>>, infer: F) -> Self
    where
        F: FnOnce() -> BTreeSet<String>,
    {
        match declared {
            Some(names) if !names.is_empty() => Self::Declared(names),
            _ => Self::Inferred(infer()),
        }
    }

    pub const fn names(&self) -> &BTreeSet<String> {
        match self {
            Self::Declared(names) | Self::Inferred(names) => names,
        }
    }

    pub fn into_names(self) -> BTreeSet<String> {
        match self {
            Self::Declared(names) | Self::Inferred(names) => names,
        }
    }

    pub const fn is_declared(&self) -> bool {
        matches!(self, Self::Declared(_))
    }

    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

/// An installed distribution found along a search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDistribution {
    /// Distribution name as recorded in its metadata.
    pub name: String,
    /// Version string, when the metadata carries one.
    pub version: Option<String>,
    /// Metadata directory the distribution was read from.
    pub location: PathBuf,
    /// Import names the distribution provides.
    pub top_level: TopLevelNames,
}

/// Port for enumerating installed distributions.
///
/// # Port Signature Rules
///
/// - All types in signatures are from `depmap-core`
/// - Implementations must return distributions in search-path order
/// - Implementations may return distributions with no import names; the
///   index decides what to keep
#[cfg_attr(test, mockall::automock)]
pub trait DistributionSourcePort: Send + Sync {
    /// Enumerate every distribution installed along `search_path`.
    fn distributions(&self, search_path: &SearchPath) -> Vec<DiscoveredDistribution>;
}

/// A source that knows of no distributions.
///
/// Every lookup against an index built on it misses, so resolution falls
/// back to identity mappings throughout.
#[derive(Debug, Clone, Default)]
pub struct NoopDistributionSource;

impl DistributionSourcePort for NoopDistributionSource {
    fn distributions(&self, _search_path: &SearchPath) -> Vec<DiscoveredDistribution> {
        Vec::new()
    }
}
