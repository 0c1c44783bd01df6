//! Ring configuration.
//!
//! Configuration is plain JSON:
//!
//! ```json
//! { "replica_count": 3, "nodes": ["NodeA", "NodeB"], "hash_width": "narrow" }
//! ```
//!
//! Every field is optional and falls back to [`RingConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::DEFAULT_REPLICA_COUNT;

/// Size of the token space keys are hashed into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashWidth {
    /// MD5 mod 2^16 ([`Md5Partitioner`](crate::Md5Partitioner)).
    #[default]
    Narrow,
    /// MD5 mod 2^64 ([`WideMd5Partitioner`](crate::WideMd5Partitioner)).
    Wide,
}

/// Configuration for building a ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    /// Virtual positions per node.
    pub replica_count: usize,

    /// Nodes added at construction, in order.
    pub nodes: Vec<String>,

    /// Token space used for both node positions and keys.
    pub hash_width: HashWidth,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            replica_count: DEFAULT_REPLICA_COUNT,
            nodes: Vec::new(),
            hash_width: HashWidth::Narrow,
        }
    }
}

impl RingConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.replica_count == 0 {
            return Err(Error::InvalidReplicaCount(self.replica_count));
        }
        if let Some(pos) = self.nodes.iter().position(|n| n.is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "node name at index {pos} is empty"
            )));
        }
        Ok(())
    }

    /// Set the replica count.
    pub fn with_replica_count(mut self, replica_count: usize) -> Self {
        self.replica_count = replica_count;
        self
    }

    /// Set the initial nodes.
    pub fn with_nodes<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes = nodes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the hash width.
    pub fn with_hash_width(mut self, hash_width: HashWidth) -> Self {
        self.hash_width = hash_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = RingConfig::from_json("{}").unwrap();
        assert_eq!(config, RingConfig::default());
        assert_eq!(config.replica_count, 3);
        assert_eq!(config.hash_width, HashWidth::Narrow);
    }

    #[test]
    fn test_full_json() {
        let config = RingConfig::from_json(
            r#"{ "replica_count": 4, "nodes": ["NodeA", "NodeB"], "hash_width": "wide" }"#,
        )
        .unwrap();
        assert_eq!(config.replica_count, 4);
        assert_eq!(config.nodes, vec!["NodeA", "NodeB"]);
        assert_eq!(config.hash_width, HashWidth::Wide);
    }

    #[test]
    fn test_zero_replicas_rejected() {
        let err = RingConfig::from_json(r#"{ "replica_count": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidReplicaCount(0)));
    }

    #[test]
    fn test_empty_node_name_rejected() {
        let err = RingConfig::from_json(r#"{ "nodes": ["NodeA", ""] }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = RingConfig::from_json(r#"{ "replicas": 3 }"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RingConfig::load("/nonexistent/ring.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_builder_methods() {
        let config = RingConfig::default()
            .with_replica_count(2)
            .with_nodes(["a", "b"])
            .with_hash_width(HashWidth::Wide);
        assert!(config.validate().is_ok());
        assert_eq!(config.nodes.len(), 2);
    }
}
