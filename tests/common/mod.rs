//! Common test utilities.
//!
//! This module provides shared test infrastructure for building fake
//! virtualenvs and capturing log output.

pub mod fixtures;
pub mod logs;
