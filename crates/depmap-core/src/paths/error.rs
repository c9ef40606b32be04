//! Environment-related error types.
//!
//! These are the only errors that escape dependency resolution: a
//! structurally invalid environment is a configuration mistake, while
//! everything per-package degrades to a best-effort mapping.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while selecting the environment to inspect.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    /// The given path lacks the marker file every virtualenv carries.
    #[error("Not a virtualenv: {}/pyvenv.cfg missing!", .path.display())]
    NotAVirtualenv { path: PathBuf },
}
