//! Consistent hash ring implementation.
//!
//! The ring manages token positions and provides lookup operations for
//! finding the nodes responsible for keys.

pub mod builder;
pub mod ring;
pub mod shared;

pub use builder::RingBuilder;
pub use ring::{AddOutcome, HashRing, RemoveOutcome};
pub use shared::SharedRing;
