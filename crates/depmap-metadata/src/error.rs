//! Internal error types for metadata reading.
//!
//! These errors never cross the port boundary: a metadata file that cannot
//! be read is treated as absent and the failure is only logged.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Errors related to reading distribution metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A metadata file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// The file that was being read
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A search path directory could not be listed.
    #[error("Failed to list {}: {source}", .path.display())]
    ListDir {
        /// The directory that was being listed
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
