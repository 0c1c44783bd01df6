//! Virtual node abstractions.
//!
//! # Virtual Nodes (VNodes) Concept
//!
//! Each physical node is placed on the ring several times, once per replica
//! index. Replica `i` of node `name` sits at the token of the string
//! `"name-i"`. More positions per node gives a smoother split of the key
//! space, and when a node joins or leaves only the arcs next to its own
//! positions change hands.
//!
//! # Performance Characteristics
//!
//! - **Memory**: O(r) per node, where r = replica count
//! - **Lookup**: O(log n) where n = total positions on the ring

use std::fmt;

use serde::Serialize;

use crate::partitioner::Partitioner;
use crate::token::Token;

/// A virtual node on the hash ring.
///
/// Represents a single token position owned by a physical node. This is also
/// the row type of [`HashRing::describe`](crate::HashRing::describe).
///
/// # Invariants
///
/// - `token` is the partitioner's token for [`VirtualNode::label`]
/// - Every `VirtualNode` belongs to exactly one physical node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VirtualNode<T: Token> {
    /// Token position on the ring.
    pub token: T,

    /// Name of the physical node that owns this position.
    pub node: String,

    /// Replica index of this position within its node (`0..replica_count`).
    pub replica: usize,
}

impl<T: Token> VirtualNode<T> {
    /// Create a new virtual node.
    #[inline]
    pub fn new(token: T, node: impl Into<String>, replica: usize) -> Self {
        Self {
            token,
            node: node.into(),
            replica,
        }
    }

    /// Create a virtual node from a node name and replica index.
    ///
    /// The token is the partitioner's hash of `"<node>-<replica>"`.
    ///
    /// # Example
    /// ```rust
    /// use corelib::{Md5Partitioner, VirtualNode};
    /// use corelib::token::Md5Token;
    ///
    /// let vnode = VirtualNode::from_index(&Md5Partitioner, "NodeA", 0);
    /// assert_eq!(vnode.token, Md5Token(8304));
    /// assert_eq!(vnode.label(), "NodeA-0");
    /// ```
    pub fn from_index<P>(partitioner: &P, node: &str, replica: usize) -> Self
    where
        P: Partitioner<TokenType = T>,
    {
        let label = vnode_label(node, replica);
        let token = partitioner.partition(label.as_bytes());
        Self::new(token, node, replica)
    }

    /// The string hashed to place this virtual node.
    pub fn label(&self) -> String {
        vnode_label(&self.node, self.replica)
    }

    /// Get the token position.
    #[inline]
    pub fn token(&self) -> T {
        self.token
    }

    /// Get the owning node name.
    #[inline]
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Clockwise distance to another virtual node.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> T {
        self.token.distance_to(&other.token)
    }
}

impl<T: Token> fmt::Display for VirtualNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VNode(token={}, node={}-{})", self.token, self.node, self.replica)
    }
}

fn vnode_label(node: &str, replica: usize) -> String {
    format!("{node}-{replica}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partitioner::{Md5Partitioner, WideMd5Partitioner};
    use crate::token::{Md5Token, WideMd5Token};

    #[test]
    fn test_vnode_creation() {
        let vnode = VirtualNode::new(Md5Token(100), "node1", 2);
        assert_eq!(vnode.token(), Md5Token(100));
        assert_eq!(vnode.node(), "node1");
        assert_eq!(vnode.replica, 2);
        assert_eq!(vnode.label(), "node1-2");
    }

    #[test]
    fn test_vnode_from_index() {
        let vnode0 = VirtualNode::from_index(&Md5Partitioner, "NodeB", 0);
        let vnode1 = VirtualNode::from_index(&Md5Partitioner, "NodeB", 1);

        assert_eq!(vnode0.token(), Md5Token(35351));
        assert_eq!(vnode1.token(), Md5Token(55662));
        assert_eq!(vnode0.node(), vnode1.node());
    }

    #[test]
    fn test_vnode_from_index_wide() {
        let vnode = VirtualNode::from_index(&WideMd5Partitioner, "NodeC", 0);
        assert_eq!(vnode.token(), WideMd5Token(1254006885176206091));
    }

    #[test]
    fn test_vnode_distance() {
        let vnode1 = VirtualNode::new(Md5Token(100), "a", 0);
        let vnode2 = VirtualNode::new(Md5Token(200), "b", 0);

        assert_eq!(vnode1.distance_to(&vnode2), Md5Token(100));
        assert_eq!(vnode2.distance_to(&vnode1), Md5Token(65436));
    }

    #[test]
    fn test_vnode_display() {
        let vnode = VirtualNode::new(Md5Token(8304), "NodeA", 0);
        assert_eq!(vnode.to_string(), "VNode(token=8304, node=NodeA-0)");
    }
}
