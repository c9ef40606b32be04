//! A single `*.dist-info` or `*.egg-info` metadata directory.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use depmap_core::{DiscoveredDistribution, TopLevelNames};

use crate::error::{MetadataError, MetadataResult};
use crate::files::{parse_installed_files, parse_record, parse_sources};
use crate::headers::parse_core_metadata;
use crate::top_level::{infer_top_level, parse_top_level};

const DIST_INFO_SUFFIX: &str = ".dist-info";
const EGG_INFO_SUFFIX: &str = ".egg-info";

/// Which packaging convention produced a metadata directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKind {
    /// Wheel-style `*.dist-info`
    DistInfo,
    /// setuptools-style `*.egg-info`
    EggInfo,
}

impl MetadataKind {
    /// Classify a directory entry by its (case-insensitive) suffix.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(DIST_INFO_SUFFIX) {
            Some(Self::DistInfo)
        } else if lower.ends_with(EGG_INFO_SUFFIX) {
            Some(Self::EggInfo)
        } else {
            None
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::DistInfo => DIST_INFO_SUFFIX,
            Self::EggInfo => EGG_INFO_SUFFIX,
        }
    }

    const fn metadata_file(self) -> &'static str {
        match self {
            Self::DistInfo => "METADATA",
            Self::EggInfo => "PKG-INFO",
        }
    }
}

/// An installed distribution's metadata directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDir {
    path: PathBuf,
    kind: MetadataKind,
}

impl MetadataDir {
    pub const fn new(path: PathBuf, kind: MetadataKind) -> Self {
        Self { path, kind }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn kind(&self) -> MetadataKind {
        self.kind
    }

    /// Read everything the index needs from this directory.
    pub fn into_distribution(self) -> DiscoveredDistribution {
        let metadata = self
            .read_text(self.kind.metadata_file())
            .map(|text| parse_core_metadata(&text))
            .unwrap_or_default();
        let name = metadata.name.unwrap_or_else(|| self.name_from_dir());
        let top_level = TopLevelNames::declared_or_else(self.declared_top_level(), || {
            self.inferred_top_level()
        });

        DiscoveredDistribution {
            name,
            version: metadata.version,
            location: self.path,
            top_level,
        }
    }

    /// Names listed in `top_level.txt`, if the file exists.
    pub fn declared_top_level(&self) -> Option<BTreeSet<String>> {
        self.read_text("top_level.txt")
            .map(|text| parse_top_level(&text))
    }

    /// Names inferred from the installed file list (empty if there is none).
    pub fn inferred_top_level(&self) -> BTreeSet<String> {
        self.installed_files()
            .map(infer_top_level)
            .unwrap_or_default()
    }

    /// Installed files relative to the site directory, if any list exists.
    pub fn installed_files(&self) -> Option<Vec<String>> {
        if self.kind == MetadataKind::DistInfo {
            if let Some(text) = self.read_text("RECORD") {
                return Some(parse_record(&text));
            }
        }
        if let Some(text) = self.read_text("installed-files.txt") {
            return Some(parse_installed_files(&text, &self.dir_name()));
        }
        self.read_text("SOURCES.txt")
            .map(|text| parse_sources(&text))
    }

    /// Read a metadata file, treating unreadable files as absent.
    fn read_text(&self, file_name: &str) -> Option<String> {
        match read_optional(&self.path.join(file_name)) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unreadable metadata file");
                None
            }
        }
    }

    fn dir_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// `foo_bar-1.0.dist-info` → `foo_bar`
    fn name_from_dir(&self) -> String {
        let dir_name = self.dir_name();
        let stem = dir_name
            .len()
            .checked_sub(self.kind.suffix().len())
            .and_then(|end| dir_name.get(..end))
            .unwrap_or(&dir_name);
        stem.split('-').next().unwrap_or(stem).to_string()
    }
}

/// Read a UTF-8 (lossy) text file; a missing file is `Ok(None)`.
fn read_optional(path: &Path) -> MetadataResult<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e)
            if matches!(
                e.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::IsADirectory | io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(None)
        }
        Err(source) => Err(MetadataError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn metadata_dir(site: &Path, dir_name: &str, files: &[(&str, &str)]) -> MetadataDir {
        let path = site.join(dir_name);
        fs::create_dir_all(&path).unwrap();
        for (file, contents) in files {
            fs::write(path.join(file), contents).unwrap();
        }
        let kind = MetadataKind::from_file_name(dir_name).unwrap();
        MetadataDir::new(path, kind)
    }

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(
            MetadataKind::from_file_name("six-1.16.0.dist-info"),
            Some(MetadataKind::DistInfo)
        );
        assert_eq!(
            MetadataKind::from_file_name("Foo-1.0-py3.11.EGG-INFO"),
            Some(MetadataKind::EggInfo)
        );
        assert_eq!(MetadataKind::from_file_name("six.py"), None);
    }

    #[test]
    fn test_declared_top_level_takes_precedence() {
        let site = TempDir::new().unwrap();
        let dir = metadata_dir(
            site.path(),
            "PyYAML-6.0.1.dist-info",
            &[
                ("METADATA", "Name: PyYAML\nVersion: 6.0.1\n"),
                ("top_level.txt", "_yaml\nyaml\n"),
                ("RECORD", "yaml/__init__.py,,\n_yaml/__init__.py,,\nextra_mod.py,,\n"),
            ],
        );

        let dist = dir.into_distribution();
        assert_eq!(dist.name, "PyYAML");
        assert_eq!(dist.version.as_deref(), Some("6.0.1"));
        assert_eq!(dist.top_level, TopLevelNames::Declared(names(&["_yaml", "yaml"])));
    }

    #[test]
    fn test_record_inference_without_top_level() {
        let site = TempDir::new().unwrap();
        let dir = metadata_dir(
            site.path(),
            "requests-2.31.0.dist-info",
            &[
                ("METADATA", "Name: requests\nVersion: 2.31.0\n"),
                (
                    "RECORD",
                    "requests/__init__.py,sha256=x,1\nrequests-2.31.0.dist-info/RECORD,,\n",
                ),
            ],
        );

        assert!(dir.declared_top_level().is_none());
        assert_eq!(
            dir.into_distribution().top_level,
            TopLevelNames::Inferred(names(&["requests"]))
        );
    }

    #[test]
    fn test_empty_top_level_falls_back_to_record() {
        let site = TempDir::new().unwrap();
        let dir = metadata_dir(
            site.path(),
            "six-1.16.0.dist-info",
            &[
                ("METADATA", "Name: six\n"),
                ("top_level.txt", "\n"),
                ("RECORD", "six.py,,\n__pycache__/six.cpython-311.pyc,,\n"),
            ],
        );

        assert_eq!(
            dir.into_distribution().top_level,
            TopLevelNames::Inferred(names(&["six"]))
        );
    }

    #[test]
    fn test_egg_info_uses_installed_files_then_sources() {
        let site = TempDir::new().unwrap();
        let installed = metadata_dir(
            site.path(),
            "legacy-0.1-py3.11.egg-info",
            &[
                ("PKG-INFO", "Metadata-Version: 1.0\nName: legacy\nVersion: 0.1\n"),
                ("installed-files.txt", "../legacy/__init__.py\nPKG-INFO\n"),
                ("SOURCES.txt", "setup.py\nsrc/legacy/__init__.py\n"),
            ],
        );
        assert_eq!(installed.inferred_top_level(), names(&["legacy"]));

        let sources_only = metadata_dir(
            site.path(),
            "devpkg.egg-info",
            &[("PKG-INFO", "Name: devpkg\n"), ("SOURCES.txt", "devpkg/__init__.py\nsetup.py\n")],
        );
        assert_eq!(sources_only.inferred_top_level(), names(&["devpkg", "setup"]));
    }

    #[test]
    fn test_no_file_list_infers_nothing() {
        let site = TempDir::new().unwrap();
        let dir = metadata_dir(site.path(), "bare-1.0.dist-info", &[("METADATA", "Name: bare\n")]);

        assert!(dir.installed_files().is_none());
        let dist = dir.into_distribution();
        assert!(dist.top_level.is_empty());
    }

    #[test]
    fn test_name_falls_back_to_directory() {
        let site = TempDir::new().unwrap();
        let dist_info = metadata_dir(site.path(), "foo_bar-1.0.dist-info", &[]);
        assert_eq!(dist_info.into_distribution().name, "foo_bar");

        let egg_info = metadata_dir(site.path(), "baz.egg-info", &[]);
        let dist = egg_info.into_distribution();
        assert_eq!(dist.name, "baz");
        assert!(dist.version.is_none());
    }

    #[test]
    fn test_read_optional_missing_file_is_none() {
        let site = TempDir::new().unwrap();
        assert!(read_optional(&site.path().join("nope")).unwrap().is_none());
    }
}
