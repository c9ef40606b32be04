//! Environment selection and package search path resolution.
//!
//! # Design
//!
//! - Returns `PathBuf`/`SearchPath` and `EnvironmentError` for clear error handling
//! - Process environment variables are read in exactly one place
//!   (`SearchPath::from_process_env`); everything downstream takes values
//! - Metadata file formats are not handled here, only directory layout

mod environment;
mod error;
mod search_path;

// Error type
pub use error::EnvironmentError;

// Environment selection
pub use environment::{PythonEnvironment, VENV_MARKER_FILE};

// Search path construction
pub use search_path::{PYTHONPATH_ENV, SearchPath, VIRTUAL_ENV_ENV, virtualenv_site_packages};
