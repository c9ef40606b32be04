//! Selection of the Python environment to inspect.
//!
//! An environment is either the ambient one (an injected [`SearchPath`],
//! normally derived from the process environment) or an explicit virtualenv
//! directory. Explicit directories are validated up front; the ambient
//! environment is trusted as-is.

use std::fmt;
use std::path::{Path, PathBuf};

use super::error::EnvironmentError;
use super::search_path::{SearchPath, virtualenv_site_packages};

/// Marker file found at the root of every virtualenv.
pub const VENV_MARKER_FILE: &str = "pyvenv.cfg";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Ambient(SearchPath),
    Virtualenv(PathBuf),
}

/// The Python environment whose installed distributions are indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonEnvironment {
    location: Location,
}

impl PythonEnvironment {
    /// The ambient environment of the current process.
    pub fn ambient() -> Self {
        Self::from_search_path(SearchPath::from_process_env())
    }

    /// An ambient environment with an explicitly injected search path.
    pub const fn from_search_path(search_path: SearchPath) -> Self {
        Self {
            location: Location::Ambient(search_path),
        }
    }

    /// A virtualenv rooted at `path`.
    ///
    /// Fails unless `path` contains a `pyvenv.cfg` file.
    pub fn virtualenv(path: impl Into<PathBuf>) -> Result<Self, EnvironmentError> {
        let path = path.into();
        if !path.join(VENV_MARKER_FILE).is_file() {
            return Err(EnvironmentError::NotAVirtualenv { path });
        }
        Ok(Self {
            location: Location::Virtualenv(path),
        })
    }

    /// The given virtualenv, or the ambient environment when `None`.
    pub fn from_venv_path(venv_path: Option<&Path>) -> Result<Self, EnvironmentError> {
        venv_path.map_or_else(|| Ok(Self::ambient()), Self::virtualenv)
    }

    /// Root of the virtualenv, if this is not the ambient environment.
    pub fn venv_path(&self) -> Option<&Path> {
        match &self.location {
            Location::Ambient(_) => None,
            Location::Virtualenv(path) => Some(path),
        }
    }

    pub const fn is_ambient(&self) -> bool {
        matches!(self.location, Location::Ambient(_))
    }

    /// Directories to scan for installed distributions.
    pub fn search_path(&self) -> SearchPath {
        match &self.location {
            Location::Ambient(search_path) => search_path.clone(),
            Location::Virtualenv(path) => SearchPath::new(virtualenv_site_packages(path)),
        }
    }
}

impl fmt::Display for PythonEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Location::Ambient(_) => f.write_str("the current environment"),
            Location::Virtualenv(path) => write!(f, "virtualenv {}", path.display()),
        }
    }
}
