//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No metadata file formats in any signature
//! - Traits are minimal: one intent per method

pub mod distribution_source;

pub use distribution_source::{
    DiscoveredDistribution, DistributionSourcePort, NoopDistributionSource, TopLevelNames,
};

#[cfg(test)]
pub use distribution_source::MockDistributionSourcePort;
