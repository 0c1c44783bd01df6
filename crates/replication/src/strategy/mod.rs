//! Replication strategy abstractions.
//!
//! Replication strategies determine how many replicas to create and where
//! to place them on the ring.
//!
//! - **SimpleStrategy**: N replicas placed on the next distinct nodes clockwise

pub mod simple;

pub use simple::SimpleStrategy;

use corelib::{HashRing, Partitioner};

use crate::placement::ReplicaPlacement;

/// Trait for replication strategies.
///
/// `replicas_for_key` is generic over the partitioner, so the trait is used
/// as a bound (`S: ReplicationStrategy`) rather than as `dyn ReplicationStrategy`.
pub trait ReplicationStrategy: Send + Sync + 'static {
    /// Number of copies this strategy places, primary included.
    fn replication_factor(&self) -> usize;

    /// Find replica nodes for a given key.
    ///
    /// # Returns
    /// The chosen nodes, primary first. Holds fewer than
    /// `replication_factor()` nodes when the ring is too small.
    fn replicas_for_key<P: Partitioner>(&self, ring: &HashRing<P>, key: &str) -> ReplicaPlacement;

    /// Get the strategy name (for logging/debugging).
    fn name(&self) -> &'static str;
}
