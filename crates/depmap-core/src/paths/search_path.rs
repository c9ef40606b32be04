//! Package search path construction.
//!
//! A search path is the ordered list of directories in which installed
//! distributions are looked for. It is always an explicit value: the ambient
//! default is read from the process environment once, up front, so callers
//! (and tests) can substitute any list they like.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding extra import directories.
pub const PYTHONPATH_ENV: &str = "PYTHONPATH";

/// Environment variable set by an activated virtualenv.
pub const VIRTUAL_ENV_ENV: &str = "VIRTUAL_ENV";

/// Ordered list of directories to scan for installed distributions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Create a search path from an explicit list of directories.
    pub fn new<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The ambient search path of the current process.
    ///
    /// Resolution order:
    /// 1. Entries of `PYTHONPATH`
    /// 2. `site-packages` directories of the virtualenv named by `VIRTUAL_ENV`
    pub fn from_process_env() -> Self {
        Self::from_env_values(env::var_os(PYTHONPATH_ENV), env::var_os(VIRTUAL_ENV_ENV))
    }

    /// Build the ambient search path from raw environment values.
    ///
    /// Empty `PYTHONPATH` entries are dropped.
    pub fn from_env_values(pythonpath: Option<OsString>, virtual_env: Option<OsString>) -> Self {
        let mut entries: Vec<PathBuf> = pythonpath
            .map(|value| {
                env::split_paths(&value)
                    .filter(|entry| !entry.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if let Some(venv) = virtual_env.filter(|value| !value.is_empty()) {
            entries.extend(virtualenv_site_packages(Path::new(&venv)));
        }

        Self { entries }
    }

    /// Directories on this search path, in lookup order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PathBuf> for SearchPath {
    fn from_iter<T: IntoIterator<Item = PathBuf>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a SearchPath {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Find the `site-packages` directories of a virtualenv.
///
/// Matches `<venv>/lib/python?.*/site-packages`, whatever interpreter
/// version created the virtualenv. Results are sorted. On Windows the
/// `<venv>/Lib/site-packages` layout is included as well.
pub fn virtualenv_site_packages(venv: &Path) -> Vec<PathBuf> {
    let lib_dir = venv.join("lib");
    let mut dirs: Vec<PathBuf> = match fs::read_dir(&lib_dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(is_versioned_python_dir)
            })
            .map(|entry| entry.path().join("site-packages"))
            .filter(|site| site.is_dir())
            .collect(),
        Err(e) => {
            tracing::debug!(path = %lib_dir.display(), error = %e, "No lib directory in virtualenv");
            Vec::new()
        }
    };
    dirs.sort();

    #[cfg(windows)]
    {
        let site = venv.join("Lib").join("site-packages");
        if site.is_dir() && !dirs.contains(&site) {
            dirs.push(site);
        }
    }

    dirs
}

/// `python?.*`: "python", exactly one character, a dot, then anything.
fn is_versioned_python_dir(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("python") else {
        return false;
    };
    let mut chars = rest.chars();
    chars.next().is_some() && chars.next() == Some('.')
}
