//! Core token trait definitions.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::Serialize;

/// Minimal token trait for the hash ring.
///
/// Tokens are immutable, comparable positions. Implementations must be
/// thread-safe and cheap to copy, compare and hash.
pub trait Token:
    Copy + Ord + Hash + Send + Sync + Debug + Display + Serialize + 'static
{
    /// Minimum token value (start of ring).
    fn zero() -> Self;
    /// Maximum token value (end of ring).
    fn max() -> Self;
    /// True if this token is the minimum.
    fn is_zero(&self) -> bool;
    /// True if this token is the maximum.
    fn is_max(&self) -> bool;
    /// Clockwise distance from `self` to `other` on the ring.
    fn distance_to(&self, other: &Self) -> Self;
    /// Numeric value of the token, wide enough for any token space.
    fn to_u128(&self) -> u128;

    /// Number of distinct positions in the token space.
    fn space() -> u128 {
        <Self as Token>::max().to_u128() + 1
    }
}
