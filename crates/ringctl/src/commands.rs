//! Subcommands and their execution.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use corelib::{HashRing, Partitioner, RingBuilder, RingConfig};
use replication::{ReplicationStrategy, SimpleStrategy};
use tracing::{info, warn};

use crate::render;

/// Nodes the demo starts from.
pub const DEMO_NODES: [&str; 5] = ["NodeA", "NodeB", "NodeC", "NodeD", "NodeE"];

/// Keys the demo places.
pub const DEMO_KEYS: [&str; 4] = ["apple", "banana", "carrot", "date"];

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every position on the ring in hash order.
    Describe {
        /// Emit the positions as JSON instead of a diagram.
        #[arg(long)]
        json: bool,
    },
    /// Show which node owns each key.
    Lookup {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Show the nodes holding copies of a key, primary first.
    Replicas {
        key: String,
        /// Number of distinct nodes to place the key on.
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
    },
    /// Show how much of the hash space each node owns.
    Ownership,
    /// Run the scripted add/remove walkthrough.
    ///
    /// Always starts from NodeA..NodeE; `--nodes` and the config file's node
    /// list are ignored, the replica count and hash width are honored.
    Demo,
}

impl Command {
    /// Builds the ring described by `config` and runs the command against it.
    pub fn execute<P, W>(&self, config: &RingConfig, partitioner: P, out: &mut W) -> Result<()>
    where
        P: Partitioner,
        W: Write,
    {
        match self {
            Command::Describe { json: true } => {
                let ring = build_ring(config, partitioner)?;
                let dump = serde_json::to_string_pretty(&ring.describe())?;
                writeln!(out, "{dump}")?;
            }
            Command::Describe { json: false } => {
                let ring = build_ring(config, partitioner)?;
                write!(out, "{}", render::ring_diagram(&ring.describe()))?;
            }
            Command::Lookup { keys } => {
                let ring = build_ring(config, partitioner)?;
                for key in keys {
                    writeln!(out, "{}", render::key_owner(key, ring.get_node(key)))?;
                }
            }
            Command::Replicas { key, count } => {
                let strategy = SimpleStrategy::new(*count)?;
                let ring = build_ring(config, partitioner)?;
                let placement = strategy.replicas_for_key(&ring, key);
                writeln!(out, "{}", render::key_replicas(key, &placement))?;
            }
            Command::Ownership => {
                let ring = build_ring(config, partitioner)?;
                write!(out, "{}", render::ownership(&ring.topology()))?;
            }
            Command::Demo => demo(config, partitioner, out)?,
        }
        Ok(())
    }
}

fn build_ring<P: Partitioner>(config: &RingConfig, partitioner: P) -> Result<HashRing<P>> {
    let ring = RingBuilder::from_config(config, partitioner)
        .build()
        .context("failed to build ring")?;
    info!(
        nodes = ring.node_count(),
        positions = ring.token_count(),
        partitioner = ring.partitioner_name(),
        "ring ready"
    );
    Ok(ring)
}

/// Five nodes, key placement, then NodeF joins, NodeB leaves and rejoins.
fn demo<P, W>(config: &RingConfig, partitioner: P, out: &mut W) -> Result<()>
where
    P: Partitioner,
    W: Write,
{
    if !config.nodes.is_empty() {
        warn!(
            ignored = config.nodes.len(),
            "demo uses its own node list, configured nodes ignored"
        );
    }
    let mut ring = RingBuilder::with_partitioner(partitioner)
        .with_replicas(config.replica_count)
        .build()
        .context("failed to build ring")?;
    for node in DEMO_NODES {
        let outcome = ring.add_node(node);
        writeln!(out, "{}", render::add_outcome(node, outcome))?;
    }

    writeln!(out, "Initial ring with {} nodes:", ring.node_count())?;
    write!(out, "{}", render::ring_diagram(&ring.describe()))?;

    writeln!(out, "\nKey Placement Example:")?;
    place_keys(&ring, out)?;

    writeln!(out, "\nReplication Example:")?;
    let strategy = SimpleStrategy::default();
    for key in &DEMO_KEYS[..2] {
        let placement = strategy.replicas_for_key(&ring, key);
        writeln!(out, "{}", render::key_replicas(key, &placement))?;
    }

    writeln!(out, "\nAdding NodeF:")?;
    add_and_show(&mut ring, "NodeF", out)?;

    writeln!(out, "\nAdding NodeF again:")?;
    let outcome = ring.add_node("NodeF");
    writeln!(out, "{}", render::add_outcome("NodeF", outcome))?;

    writeln!(out, "\nRemoving NodeB:")?;
    let outcome = ring.remove_node("NodeB");
    writeln!(out, "{}", render::remove_outcome("NodeB", outcome))?;
    write!(out, "{}", render::ring_diagram(&ring.describe()))?;
    writeln!(out, "{}", render::key_owner_now("apple", ring.get_node("apple")))?;

    writeln!(out, "\nRemoving NodeB again:")?;
    let outcome = ring.remove_node("NodeB");
    writeln!(out, "{}", render::remove_outcome("NodeB", outcome))?;

    writeln!(out, "\nRe-adding NodeB:")?;
    add_and_show(&mut ring, "NodeB", out)?;

    writeln!(out, "\nKey placement after ring changes:")?;
    place_keys(&ring, out)?;
    Ok(())
}

fn add_and_show<P: Partitioner, W: Write>(
    ring: &mut HashRing<P>,
    node: &str,
    out: &mut W,
) -> Result<()> {
    let outcome = ring.add_node(node);
    writeln!(out, "{}", render::add_outcome(node, outcome))?;
    write!(out, "{}", render::ring_diagram(&ring.describe()))?;
    writeln!(out, "{}", render::key_owner_now("apple", ring.get_node("apple")))?;
    Ok(())
}

fn place_keys<P: Partitioner, W: Write>(ring: &HashRing<P>, out: &mut W) -> Result<()> {
    for key in DEMO_KEYS {
        writeln!(out, "{}", render::key_owner(key, ring.get_node(key)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::{Md5Partitioner, WideMd5Partitioner};

    fn run(command: Command, config: &RingConfig) -> String {
        let mut out = Vec::new();
        command.execute(config, Md5Partitioner, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_config() -> RingConfig {
        RingConfig::default().with_nodes(DEMO_NODES)
    }

    #[test]
    fn test_lookup() {
        let output = run(
            Command::Lookup {
                keys: vec!["apple".into(), "carrot".into()],
            },
            &sample_config(),
        );
        assert_eq!(
            output,
            "Key 'apple' is stored on: NodeD\nKey 'carrot' is stored on: NodeB\n"
        );
    }

    #[test]
    fn test_lookup_on_empty_ring() {
        let output = run(
            Command::Lookup {
                keys: vec!["x".into()],
            },
            &RingConfig::default(),
        );
        assert_eq!(output, "Key 'x' is stored on: <no nodes>\n");
    }

    #[test]
    fn test_replicas() {
        let output = run(
            Command::Replicas {
                key: "banana".into(),
                count: 3,
            },
            &sample_config(),
        );
        assert_eq!(output, "Key 'banana' is replicated to: [NodeD, NodeA, NodeB]\n");
    }

    #[test]
    fn test_zero_replicas_is_an_error() {
        let mut out = Vec::new();
        let err = Command::Replicas {
            key: "banana".into(),
            count: 0,
        }
        .execute(&sample_config(), Md5Partitioner, &mut out)
        .unwrap_err();
        assert!(err.to_string().contains("replication factor"));
    }

    #[test]
    fn test_describe_json() {
        let output = run(Command::Describe { json: true }, &sample_config());
        let dump: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rows = dump.as_array().unwrap();
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0]["token"], 8304);
        assert_eq!(rows[0]["node"], "NodeA");
        assert_eq!(rows[0]["replica"], 0);
    }

    #[test]
    fn test_wide_describe() {
        let mut out = Vec::new();
        Command::Describe { json: false }
            .execute(&sample_config(), WideMd5Partitioner, &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("1254006885176206091"));
    }

    #[test]
    fn test_zero_replica_config_rejected() {
        let mut out = Vec::new();
        let config = sample_config().with_replica_count(0);
        assert!(Command::Ownership
            .execute(&config, Md5Partitioner, &mut out)
            .is_err());
    }

    #[test]
    fn test_demo_script() {
        let output = run(Command::Demo, &RingConfig::default());

        assert!(output.starts_with("Node 'NodeA' added with 3 replicas.\n"));
        assert!(output.contains("Initial ring with 5 nodes:"));
        assert!(output.contains("Key 'apple' is replicated to: [NodeD, NodeA, NodeE]"));
        assert!(output.contains("Node 'NodeF' already exists. Skipping."));
        assert!(output.contains("Node 'NodeB' does not exist. Cannot remove."));
        assert!(output.ends_with(
            "Key placement after ring changes:\n\
             Key 'apple' is stored on: NodeD\n\
             Key 'banana' is stored on: NodeF\n\
             Key 'carrot' is stored on: NodeB\n\
             Key 'date' is stored on: NodeA\n"
        ));
    }

    #[test]
    fn test_demo_reports_owner_after_each_change() {
        let output = run(Command::Demo, &RingConfig::default());
        let after_changes: Vec<&str> = output
            .lines()
            .filter(|line| line.starts_with("Key 'apple' is now stored on: "))
            .collect();
        // NodeF joins, NodeB leaves, NodeB rejoins.
        assert_eq!(after_changes.len(), 3);
        assert!(after_changes
            .iter()
            .all(|line| *line == "Key 'apple' is now stored on: NodeD"));
    }

    #[test]
    fn test_demo_ignores_configured_nodes() {
        let config = RingConfig::default()
            .with_nodes(["x", "y"])
            .with_replica_count(2);
        let output = run(Command::Demo, &config);
        assert!(output.starts_with("Node 'NodeA' added with 2 replicas.\n"));
        assert!(output.contains("Initial ring with 5 nodes:"));
        assert!(!output.contains("Node 'x'"));
    }
}
