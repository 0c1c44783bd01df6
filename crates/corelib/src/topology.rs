//! Ownership view over the ring.
//!
//! A key is routed to the first position strictly after its token, so each
//! position owns the half-open arc from the previous position up to (but not
//! including) itself. The lowest position also owns the wrap-around arc from
//! the highest position.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::partitioner::Partitioner;
use crate::ring::HashRing;
use crate::token::Token;

/// How much of the token space one physical node owns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeOwnership {
    /// Number of positions the node holds on the ring.
    pub positions: usize,
    /// Number of tokens routed to the node.
    pub tokens: u128,
    /// `tokens` as a fraction of the whole token space.
    pub share: f64,
}

/// Per-node ownership of a ring, keyed by node name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Topology {
    nodes: BTreeMap<String, NodeOwnership>,
}

impl Topology {
    pub fn of<P: Partitioner>(ring: &HashRing<P>) -> Self {
        let space = ring.partitioner().max_token().to_u128() + 1;
        let positions: Vec<_> = ring.positions().collect();
        let mut nodes: BTreeMap<String, NodeOwnership> = BTreeMap::new();

        for (i, vnode) in positions.iter().enumerate() {
            let prev = positions[(i + positions.len() - 1) % positions.len()];
            let tokens = if positions.len() == 1 {
                space
            } else {
                prev.distance_to(vnode).to_u128()
            };

            let entry = nodes.entry(vnode.node.clone()).or_insert(NodeOwnership {
                positions: 0,
                tokens: 0,
                share: 0.0,
            });
            entry.positions += 1;
            entry.tokens += tokens;
        }

        for ownership in nodes.values_mut() {
            ownership.share = ownership.tokens as f64 / space as f64;
        }

        Self { nodes }
    }

    pub fn get(&self, node: &str) -> Option<&NodeOwnership> {
        self.nodes.get(node)
    }

    /// Nodes in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeOwnership)> + '_ {
        self.nodes.iter().map(|(name, o)| (name.as_str(), o))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
