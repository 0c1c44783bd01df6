//! Text rendering for ring data.
//!
//! The core crate only returns data; every line a user sees is built here.

use std::fmt::Write as _;

use corelib::{AddOutcome, RemoveOutcome, Token, Topology, VirtualNode};
use replication::ReplicaPlacement;

const RULE_WIDTH: usize = 54;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Table of positions followed by a one-line ring visualization.
pub fn ring_diagram<T: Token>(positions: &[VirtualNode<T>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Consistent Hash Ring Diagram:");
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{:<8} | {:<7} | {:<10}", "Node", "Replica", "Hash");
    let _ = writeln!(out, "{}", rule());
    for vnode in positions {
        let _ = writeln!(
            out,
            "{:<8} | {:<7} | {:<10}",
            vnode.node, vnode.replica, vnode.token
        );
    }
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "Ring Visualization (sorted by hash):");
    let _ = writeln!(out, "{}", ring_line(positions));
    let _ = writeln!(out, "{}", rule());
    out
}

/// `[ hash]node-replica -> ...` in token order.
pub fn ring_line<T: Token>(positions: &[VirtualNode<T>]) -> String {
    positions
        .iter()
        .map(|v| format!("[{:>5}]{}", v.token, v.label()))
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn add_outcome(node: &str, outcome: AddOutcome) -> String {
    match outcome {
        AddOutcome::Added { replicas } => format!("Node '{node}' added with {replicas} replicas."),
        AddOutcome::AlreadyExists => format!("Node '{node}' already exists. Skipping."),
    }
}

pub fn remove_outcome(node: &str, outcome: RemoveOutcome) -> String {
    match outcome {
        RemoveOutcome::Removed { .. } => format!("Node '{node}' and its replicas removed."),
        RemoveOutcome::NotFound => format!("Node '{node}' does not exist. Cannot remove."),
    }
}

pub fn key_owner(key: &str, owner: Option<&str>) -> String {
    format!("Key '{key}' is stored on: {}", owner.unwrap_or("<no nodes>"))
}

/// Owner line printed after the membership changed.
pub fn key_owner_now(key: &str, owner: Option<&str>) -> String {
    format!(
        "Key '{key}' is now stored on: {}",
        owner.unwrap_or("<no nodes>")
    )
}

pub fn key_replicas(key: &str, placement: &ReplicaPlacement) -> String {
    format!("Key '{key}' is replicated to: [{}]", placement.nodes().join(", "))
}

/// Per-node position count and share of the token space.
pub fn ownership(topology: &Topology) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} | {:<9} | {:>7}", "Node", "Positions", "Share");
    let _ = writeln!(out, "{}", rule());
    for (node, owned) in topology.iter() {
        let _ = writeln!(
            out,
            "{:<8} | {:<9} | {:>6.2}%",
            node,
            owned.positions,
            owned.share * 100.0
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::token::Md5Token;
    use corelib::HashRing;

    #[test]
    fn test_diagram_rows_are_padded() {
        let positions = vec![
            VirtualNode::new(Md5Token(8304), "NodeA", 0),
            VirtualNode::new(Md5Token(16954), "NodeC", 2),
        ];
        let diagram = ring_diagram(&positions);
        let lines: Vec<&str> = diagram.lines().collect();

        assert_eq!(lines[0], "Consistent Hash Ring Diagram:");
        assert_eq!(lines[1].len(), 54);
        assert_eq!(lines[2], "Node     | Replica | Hash      ");
        assert_eq!(lines[4], "NodeA    | 0       | 8304      ");
        assert_eq!(lines[5], "NodeC    | 2       | 16954     ");
        assert_eq!(lines[8], "[ 8304]NodeA-0 -> [16954]NodeC-2");
    }

    #[test]
    fn test_empty_diagram() {
        let diagram = ring_diagram::<Md5Token>(&[]);
        assert_eq!(diagram.lines().count(), 8);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            add_outcome("NodeF", AddOutcome::Added { replicas: 3 }),
            "Node 'NodeF' added with 3 replicas."
        );
        assert_eq!(
            add_outcome("NodeF", AddOutcome::AlreadyExists),
            "Node 'NodeF' already exists. Skipping."
        );
        assert_eq!(
            remove_outcome("NodeB", RemoveOutcome::Removed { replicas: 3 }),
            "Node 'NodeB' and its replicas removed."
        );
        assert_eq!(
            remove_outcome("NodeB", RemoveOutcome::NotFound),
            "Node 'NodeB' does not exist. Cannot remove."
        );
    }

    #[test]
    fn test_key_lines() {
        assert_eq!(key_owner("x", None), "Key 'x' is stored on: <no nodes>");
        assert_eq!(
            key_owner_now("apple", Some("NodeD")),
            "Key 'apple' is now stored on: NodeD"
        );
        let placement = ReplicaPlacement::new(vec!["NodeD".into(), "NodeA".into()], 2);
        assert_eq!(
            key_replicas("apple", &placement),
            "Key 'apple' is replicated to: [NodeD, NodeA]"
        );
    }

    #[test]
    fn test_ownership_table() {
        let ring = HashRing::new(["NodeA"], 2);
        let table = ownership(&ring.topology());
        assert!(table.lines().nth(2).unwrap().ends_with("100.00%"));
    }
}
