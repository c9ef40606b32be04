//! Distribution discovery along a search path.

use std::fs;
use std::path::Path;

use depmap_core::{DiscoveredDistribution, DistributionSourcePort, SearchPath};

use crate::dist::{MetadataDir, MetadataKind};
use crate::error::MetadataError;

/// Reads distribution metadata installed in `site-packages`-style directories.
///
/// Every directory on the search path is scanned (non-recursively) for
/// `*.dist-info` and `*.egg-info` directories. Entries that are missing,
/// unreadable or not directories are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SitePackagesSource;

impl SitePackagesSource {
    pub const fn new() -> Self {
        Self
    }
}

impl DistributionSourcePort for SitePackagesSource {
    fn distributions(&self, search_path: &SearchPath) -> Vec<DiscoveredDistribution> {
        search_path
            .iter()
            .flat_map(|dir| find_metadata_dirs(dir))
            .map(MetadataDir::into_distribution)
            .collect()
    }
}

/// Metadata directories directly inside `dir`, sorted by file name.
pub fn find_metadata_dirs(dir: &Path) -> Vec<MetadataDir> {
    if !dir.is_dir() {
        tracing::debug!(path = %dir.display(), "Skipping search path entry that is not a directory");
        return Vec::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            let e = MetadataError::ListDir {
                path: dir.to_path_buf(),
                source,
            };
            tracing::warn!(error = %e, "Skipping unreadable search path entry");
            return Vec::new();
        }
    };

    let mut found: Vec<MetadataDir> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let kind = MetadataKind::from_file_name(&entry.file_name().to_string_lossy())?;
            let path = entry.path();
            path.is_dir().then(|| MetadataDir::new(path, kind))
        })
        .collect();
    found.sort_by(|a, b| a.path().cmp(b.path()));
    found
}
