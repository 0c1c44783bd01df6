//! Replication strategies for consistent hashing.
//!
//! This crate decides which nodes hold copies of a key:
//! - How many replicas to create
//! - Where to place them (which nodes, in which order)

pub mod error;
pub mod placement;
pub mod strategy;

pub use error::ReplicationError;
pub use placement::ReplicaPlacement;
pub use strategy::{ReplicationStrategy, SimpleStrategy};
