//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (filesystem layout, metadata formats, etc.).
//!
//! # Structure
//!
//! - `package` - Package records, provenance tags and name normalization

mod package;

pub use package::{PackageRecord, Provenance, normalize_name};
