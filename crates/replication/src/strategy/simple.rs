//! Simple replication strategy.
//!
//! Places N replicas on the first N distinct nodes met while walking
//! clockwise from the key's token.
//!
//! # Algorithm
//!
//! 1. Find the key's owning position (right-bisect of its token)
//! 2. Walk clockwise, skipping positions of nodes already chosen
//! 3. Stop after N nodes or one full turn of the ring
//!
//! # Limitations
//!
//! - Doesn't consider data center/rack placement
//! - May place replicas on nodes in the same failure domain

use corelib::{HashRing, Partitioner};
use tracing::debug;

use crate::error::ReplicationError;
use crate::placement::ReplicaPlacement;
use crate::strategy::ReplicationStrategy;

/// Simple replication strategy: N replicas placed sequentially around the ring.
///
/// # Example
///
/// ```rust
/// use corelib::HashRing;
/// use replication::{ReplicationStrategy, SimpleStrategy};
///
/// let ring = HashRing::new(["NodeA", "NodeB", "NodeC", "NodeD", "NodeE"], 3);
/// let strategy = SimpleStrategy::new(3).unwrap();
///
/// let placement = strategy.replicas_for_key(&ring, "apple");
/// assert_eq!(placement.primary(), Some("NodeD"));
/// assert_eq!(placement.nodes(), ["NodeD", "NodeA", "NodeE"]);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    /// Number of replicas to create (including primary).
    replication_factor: usize,
}

impl SimpleStrategy {
    /// Create a new simple strategy with the given replication factor.
    ///
    /// # Arguments
    /// * `replication_factor` - Number of copies (typically 1-5)
    ///   - 1: No replication (single copy)
    ///   - 3: Standard (primary + 2 replicas)
    ///
    /// # Errors
    /// [`ReplicationError::ZeroReplicationFactor`] for a factor of 0.
    pub fn new(replication_factor: usize) -> Result<Self, ReplicationError> {
        if replication_factor == 0 {
            return Err(ReplicationError::ZeroReplicationFactor);
        }
        Ok(Self { replication_factor })
    }
}

impl Default for SimpleStrategy {
    /// Three copies: primary plus two replicas.
    fn default() -> Self {
        Self {
            replication_factor: 3,
        }
    }
}

impl ReplicationStrategy for SimpleStrategy {
    fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    fn replicas_for_key<P: Partitioner>(&self, ring: &HashRing<P>, key: &str) -> ReplicaPlacement {
        let replicas: Vec<String> = ring
            .get_replica_nodes(key, self.replication_factor)
            .into_iter()
            .map(str::to_owned)
            .collect();

        let placement = ReplicaPlacement::new(replicas, self.replication_factor);
        if placement.is_degraded() {
            debug!(
                key,
                requested = self.replication_factor,
                placed = placement.len(),
                "fewer distinct nodes than replication factor"
            );
        }
        placement
    }

    fn name(&self) -> &'static str {
        "SimpleStrategy"
    }
}
