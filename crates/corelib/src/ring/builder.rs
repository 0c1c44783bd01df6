//! Validated ring construction.

use crate::config::RingConfig;
use crate::error::{Error, Result};
use crate::partitioner::{Md5Partitioner, Partitioner};
use crate::ring::HashRing;
use crate::DEFAULT_REPLICA_COUNT;

/// Builder for [`HashRing`].
///
/// Unlike [`HashRing::new`], [`RingBuilder::build`] rejects a replica count
/// of zero.
///
/// # Example
///
/// ```rust
/// use corelib::RingBuilder;
///
/// let ring = RingBuilder::new()
///     .with_replicas(8)
///     .add_node("NodeA")
///     .add_node("NodeB")
///     .build()
///     .unwrap();
/// assert_eq!(ring.node_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuilder<P: Partitioner = Md5Partitioner> {
    partitioner: P,
    replica_count: usize,
    nodes: Vec<String>,
}

impl RingBuilder<Md5Partitioner> {
    pub fn new() -> Self {
        Self::with_partitioner(Md5Partitioner)
    }
}

impl Default for RingBuilder<Md5Partitioner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Partitioner> RingBuilder<P> {
    pub fn with_partitioner(partitioner: P) -> Self {
        Self {
            partitioner,
            replica_count: DEFAULT_REPLICA_COUNT,
            nodes: Vec::new(),
        }
    }

    /// Starts from a configuration's replica count and node list.
    pub fn from_config(config: &RingConfig, partitioner: P) -> Self {
        Self::with_partitioner(partitioner)
            .with_replicas(config.replica_count)
            .add_nodes(config.nodes.iter().cloned())
    }

    /// Sets the number of virtual positions per node.
    pub fn with_replicas(mut self, replica_count: usize) -> Self {
        self.replica_count = replica_count;
        self
    }

    /// Queues a node; nodes are added to the ring in the order queued.
    pub fn add_node(mut self, node: impl Into<String>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn add_nodes<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<HashRing<P>> {
        if self.replica_count == 0 {
            return Err(Error::InvalidReplicaCount(self.replica_count));
        }
        let mut ring = HashRing::with_partitioner(self.partitioner, self.replica_count);
        for node in &self.nodes {
            ring.add_node(node);
        }
        Ok(ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partitioner::WideMd5Partitioner;
    use crate::HashWidth;

    #[test]
    fn test_builder_rejects_zero_replicas() {
        let err = RingBuilder::new().with_replicas(0).build().unwrap_err();
        assert!(matches!(err, Error::InvalidReplicaCount(0)));
    }

    #[test]
    fn test_builder_duplicate_nodes_are_skipped() {
        let ring = RingBuilder::new()
            .add_nodes(["NodeA", "NodeB", "NodeA"])
            .build()
            .unwrap();
        assert_eq!(ring.node_count(), 2);
        assert_eq!(ring.token_count(), 6);
    }

    #[test]
    fn test_builder_from_config() {
        let config = RingConfig {
            replica_count: 5,
            nodes: vec!["NodeA".into(), "NodeB".into()],
            hash_width: HashWidth::Wide,
        };
        let ring = RingBuilder::from_config(&config, WideMd5Partitioner)
            .build()
            .unwrap();
        assert_eq!(ring.replica_count(), 5);
        assert_eq!(ring.token_count(), 10);
        assert_eq!(ring.partitioner_name(), "WideMd5Partitioner");
    }
}
