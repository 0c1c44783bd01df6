//! Lock-guarded ring for concurrent callers.
//!
//! `add_node` and `remove_node` touch the position map, the sorted token
//! list and the node set together. One `RwLock` over the whole ring makes
//! each of them a single step for any concurrent reader.

use parking_lot::RwLock;

use crate::partitioner::{Md5Partitioner, Partitioner};
use crate::ring::{AddOutcome, HashRing, RemoveOutcome};
use crate::vnode::VirtualNode;

/// A [`HashRing`] that can be shared across threads (e.g. behind an `Arc`).
#[derive(Debug)]
pub struct SharedRing<P: Partitioner = Md5Partitioner> {
    inner: RwLock<HashRing<P>>,
}

impl<P: Partitioner> SharedRing<P> {
    pub fn new(ring: HashRing<P>) -> Self {
        Self {
            inner: RwLock::new(ring),
        }
    }

    pub fn add_node(&self, node: &str) -> AddOutcome {
        self.inner.write().add_node(node)
    }

    pub fn remove_node(&self, node: &str) -> RemoveOutcome {
        self.inner.write().remove_node(node)
    }

    pub fn get_node(&self, key: &str) -> Option<String> {
        self.inner.read().get_node(key).map(str::to_owned)
    }

    pub fn get_replica_nodes(&self, key: &str, desired: usize) -> Vec<String> {
        self.inner
            .read()
            .get_replica_nodes(key, desired)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub fn describe(&self) -> Vec<VirtualNode<P::TokenType>> {
        self.inner.read().describe()
    }

    /// Runs `f` against a consistent view of the ring.
    pub fn read<R>(&self, f: impl FnOnce(&HashRing<P>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Clones the current ring state.
    pub fn snapshot(&self) -> HashRing<P> {
        self.inner.read().clone()
    }

    pub fn into_inner(self) -> HashRing<P> {
        self.inner.into_inner()
    }
}

impl<P: Partitioner> From<HashRing<P>> for SharedRing<P> {
    fn from(ring: HashRing<P>) -> Self {
        Self::new(ring)
    }
}
