//! Replica placement results.

use serde::Serialize;

/// Nodes chosen to hold a key, primary first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplicaPlacement {
    replicas: Vec<String>,
    requested: usize,
}

impl ReplicaPlacement {
    pub fn new(replicas: Vec<String>, requested: usize) -> Self {
        Self {
            replicas,
            requested,
        }
    }

    /// The node that owns the key, `None` on an empty ring.
    pub fn primary(&self) -> Option<&str> {
        self.replicas.first().map(String::as_str)
    }

    /// Every replica after the primary, in ring order.
    pub fn secondaries(&self) -> &[String] {
        self.replicas.get(1..).unwrap_or_default()
    }

    pub fn nodes(&self) -> &[String] {
        &self.replicas
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    /// True when the ring has fewer distinct nodes than were requested.
    pub fn is_degraded(&self) -> bool {
        self.replicas.len() < self.requested
    }

    pub fn len(&self) -> usize {
        self.replicas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replicas.is_empty()
    }
}

impl IntoIterator for ReplicaPlacement {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.replicas.into_iter()
    }
}
