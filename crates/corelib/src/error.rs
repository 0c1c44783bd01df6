//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// Ring membership changes never fail; a duplicate add or a missing remove is
/// reported through [`AddOutcome`](crate::AddOutcome) and
/// [`RemoveOutcome`](crate::RemoveOutcome). These errors only come from the
/// validated construction path.
#[derive(Debug, Error)]
pub enum Error {
    /// Every node needs at least one position on the ring.
    #[error("Invalid replica count: {0} (must be at least 1)")]
    InvalidReplicaCount(usize),
    /// Configuration is well formed but not usable.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// Configuration could not be parsed.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Configuration file could not be read.
    #[error("Config read error: {0}")]
    Io(#[from] std::io::Error),
}
