//! Hash ring data structure.
//!
//! Positions are kept twice: a map from token to the virtual node placed
//! there, and an ascending, duplicate-free vector of the same tokens. The
//! vector is what lookups bisect; the map answers "who lives here".

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, warn};

use crate::partitioner::{Md5Partitioner, Partitioner};
use crate::topology::Topology;
use crate::vnode::VirtualNode;
use crate::DEFAULT_REPLICA_COUNT;

/// Result of [`HashRing::add_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The node was placed on the ring with `replicas` virtual positions.
    Added { replicas: usize },
    /// The node was already on the ring; nothing changed.
    AlreadyExists,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added { .. })
    }
}

/// Result of [`HashRing::remove_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The node and its `replicas` remaining positions were taken off the ring.
    Removed { replicas: usize },
    /// The node was not on the ring; nothing changed.
    NotFound,
}

impl RemoveOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed { .. })
    }
}

/// Consistent hash ring mapping string keys to named nodes.
///
/// Each physical node owns `replica_count` virtual positions. A key is owned
/// by the first position strictly after the key's token, wrapping from the
/// highest position back to the lowest.
///
/// Mutation takes `&mut self`; wrap the ring in a
/// [`SharedRing`](crate::SharedRing) to share it between threads.
///
/// # Example
///
/// ```rust
/// use corelib::HashRing;
///
/// let ring = HashRing::new(["NodeA", "NodeB", "NodeC", "NodeD", "NodeE"], 3);
/// assert_eq!(ring.get_node("apple"), Some("NodeD"));
/// assert_eq!(ring.get_replica_nodes("apple", 3), vec!["NodeD", "NodeA", "NodeE"]);
/// ```
#[derive(Debug, Clone)]
pub struct HashRing<P: Partitioner = Md5Partitioner> {
    partitioner: P,
    replica_count: usize,
    positions: HashMap<P::TokenType, VirtualNode<P::TokenType>>,
    sorted_tokens: Vec<P::TokenType>,
    node_names: BTreeSet<String>,
}

impl Default for HashRing<Md5Partitioner> {
    fn default() -> Self {
        Self::with_partitioner(Md5Partitioner, DEFAULT_REPLICA_COUNT)
    }
}

impl HashRing<Md5Partitioner> {
    /// Builds a ring on the 16-bit MD5 partitioner and adds `nodes` in order.
    ///
    /// `replica_count` is not validated; use [`RingBuilder`](crate::RingBuilder)
    /// to reject a zero count.
    pub fn new<I, S>(nodes: I, replica_count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ring = Self::with_partitioner(Md5Partitioner, replica_count);
        for node in nodes {
            ring.add_node(node.as_ref());
        }
        ring
    }
}

impl<P: Partitioner> HashRing<P> {
    /// Creates an empty ring on the given partitioner.
    pub fn with_partitioner(partitioner: P, replica_count: usize) -> Self {
        Self {
            partitioner,
            replica_count,
            positions: HashMap::new(),
            sorted_tokens: Vec::new(),
            node_names: BTreeSet::new(),
        }
    }

    /// Places `node` on the ring at `replica_count` virtual positions.
    ///
    /// A token collision between two virtual nodes is not resolved: the later
    /// position replaces the earlier one and the token stays listed once.
    pub fn add_node(&mut self, node: &str) -> AddOutcome {
        if self.node_names.contains(node) {
            debug!(node, "node already on ring, skipping");
            return AddOutcome::AlreadyExists;
        }

        for replica in 0..self.replica_count {
            let vnode = VirtualNode::from_index(&self.partitioner, node, replica);
            let token = vnode.token;

            if let Some(previous) = self.positions.insert(token, vnode) {
                warn!(
                    %token,
                    previous = %previous.label(),
                    node,
                    replica,
                    "token collision, previous position overwritten"
                );
            }
            if let Err(idx) = self.sorted_tokens.binary_search(&token) {
                self.sorted_tokens.insert(idx, token);
            }
        }

        self.node_names.insert(node.to_owned());
        debug!(node, replicas = self.replica_count, "added node to ring");
        AddOutcome::Added {
            replicas: self.replica_count,
        }
    }

    /// Takes `node` and every position it owns off the ring.
    pub fn remove_node(&mut self, node: &str) -> RemoveOutcome {
        if !self.node_names.remove(node) {
            debug!(node, "node not on ring, nothing to remove");
            return RemoveOutcome::NotFound;
        }

        let positions = &mut self.positions;
        let before = self.sorted_tokens.len();
        self.sorted_tokens.retain(|token| {
            let owned = positions.get(token).is_some_and(|v| v.node == node);
            if owned {
                positions.remove(token);
            }
            !owned
        });
        let replicas = before - self.sorted_tokens.len();

        debug!(node, replicas, "removed node from ring");
        RemoveOutcome::Removed { replicas }
    }

    /// Returns the node that owns `key`, or `None` on an empty ring.
    pub fn get_node(&self, key: &str) -> Option<&str> {
        let idx = self.successor_index(key)?;
        self.position_at(idx).map(VirtualNode::node)
    }

    /// Returns up to `desired` distinct nodes for `key`, primary first.
    ///
    /// Walks clockwise from the key's owning position, skipping nodes already
    /// collected. Every position is visited at most once, so asking for more
    /// nodes than the ring holds returns each node exactly once.
    pub fn get_replica_nodes(&self, key: &str, desired: usize) -> Vec<&str> {
        let Some(start) = self.successor_index(key) else {
            return Vec::new();
        };
        let len = self.sorted_tokens.len();
        let mut nodes = Vec::with_capacity(desired.min(self.node_names.len()));
        let mut seen = HashSet::new();

        for offset in 0..len {
            if nodes.len() >= desired {
                break;
            }
            let Some(vnode) = self.position_at((start + offset) % len) else {
                continue;
            };
            if seen.insert(vnode.node()) {
                nodes.push(vnode.node());
            }
        }

        nodes
    }

    /// Returns every position on the ring in token order.
    pub fn describe(&self) -> Vec<VirtualNode<P::TokenType>> {
        self.positions().cloned().collect()
    }

    /// Iterates over the positions on the ring in token order.
    pub fn positions(&self) -> impl Iterator<Item = &VirtualNode<P::TokenType>> + '_ {
        self.sorted_tokens
            .iter()
            .filter_map(move |token| self.positions.get(token))
    }

    /// Hashes `key` into this ring's token space.
    pub fn hash(&self, key: &str) -> P::TokenType {
        self.partitioner.partition(key.as_bytes())
    }

    /// Per-node ownership of the token space.
    pub fn topology(&self) -> Topology {
        Topology::of(self)
    }

    pub fn replica_count(&self) -> usize {
        self.replica_count
    }

    /// Number of physical nodes on the ring.
    pub fn node_count(&self) -> usize {
        self.node_names.len()
    }

    /// Number of occupied positions on the ring.
    pub fn token_count(&self) -> usize {
        self.sorted_tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted_tokens.is_empty()
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.node_names.contains(node)
    }

    /// Node names in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.node_names.iter().map(String::as_str)
    }

    pub fn partitioner(&self) -> &P {
        &self.partitioner
    }

    pub fn partitioner_name(&self) -> &'static str {
        self.partitioner.name()
    }

    /// Right-bisect of the key's token, wrapped onto the ring.
    fn successor_index(&self, key: &str) -> Option<usize> {
        if self.sorted_tokens.is_empty() {
            return None;
        }
        let token = self.hash(key);
        let idx = self.sorted_tokens.partition_point(|t| *t <= token);
        Some(idx % self.sorted_tokens.len())
    }

    fn position_at(&self, idx: usize) -> Option<&VirtualNode<P::TokenType>> {
        self.sorted_tokens
            .get(idx)
            .and_then(|token| self.positions.get(token))
    }
}
