//! Error types for replication strategies.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicationError {
    /// A strategy must place at least the primary copy.
    #[error("replication factor must be at least 1")]
    ZeroReplicationFactor,
}
