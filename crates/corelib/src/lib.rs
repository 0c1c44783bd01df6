//! Core library for consistent hashing.
//!
//! This crate provides the building blocks of an MD5-keyed hash ring:
//! - Token types and the MD5 partitioners that produce them
//! - Virtual node abstractions
//! - The ring itself, its builder and a lock-guarded shared wrapper
//! - Ownership reporting over the ring (topology)
//! - Ring configuration

pub mod config;
pub mod error;
pub mod partitioner;
pub mod ring;
pub mod token;
pub mod topology;
pub mod vnode;

pub use config::{HashWidth, RingConfig};
pub use error::{Error, Result};
pub use partitioner::{Md5Partitioner, Partitioner, WideMd5Partitioner};
pub use ring::{AddOutcome, HashRing, RemoveOutcome, RingBuilder, SharedRing};
pub use token::Token;
pub use topology::{NodeOwnership, Topology};
pub use vnode::VirtualNode;

/// Number of virtual positions per node when none is configured.
pub const DEFAULT_REPLICA_COUNT: usize = 3;
