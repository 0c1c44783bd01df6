//! MD5 token implementations.
//!
//! Both tokens reduce the 128-bit MD5 digest, read as a big-endian integer,
//! modulo the size of their space. That is the same as keeping the trailing
//! digest bytes.

use std::fmt;

use ::md5::{Digest, Md5};
use serde::Serialize;

use crate::token::traits::Token;

/// Computes the MD5 digest of `data`.
pub(crate) fn digest(data: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&Md5::digest(data));
    out
}

/// 16-bit MD5 token: digest mod 2^16.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct Md5Token(pub u16);

impl Token for Md5Token {
    fn zero() -> Self {
        Md5Token(0)
    }

    fn max() -> Self {
        Md5Token(u16::MAX)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_max(&self) -> bool {
        self.0 == u16::MAX
    }

    fn distance_to(&self, other: &Self) -> Self {
        Md5Token(other.0.wrapping_sub(self.0))
    }

    fn to_u128(&self) -> u128 {
        u128::from(self.0)
    }
}

impl Md5Token {
    /// Creates a token from a byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        let d = digest(data);
        Md5Token(u16::from_be_bytes([d[14], d[15]]))
    }

    /// Creates a token from a string key (hashes its UTF-8 bytes).
    pub fn from_key(key: &str) -> Self {
        Self::from_bytes(key.as_bytes())
    }
}

impl fmt::Display for Md5Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// 64-bit MD5 token: digest mod 2^64.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct WideMd5Token(pub u64);

impl Token for WideMd5Token {
    fn zero() -> Self {
        WideMd5Token(0)
    }

    fn max() -> Self {
        WideMd5Token(u64::MAX)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_max(&self) -> bool {
        self.0 == u64::MAX
    }

    fn distance_to(&self, other: &Self) -> Self {
        WideMd5Token(other.0.wrapping_sub(self.0))
    }

    fn to_u128(&self) -> u128 {
        u128::from(self.0)
    }
}

impl WideMd5Token {
    /// Creates a token from a byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        let d = digest(data);
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&d[8..]);
        WideMd5Token(u64::from_be_bytes(tail))
    }

    /// Creates a token from a string key (hashes its UTF-8 bytes).
    pub fn from_key(key: &str) -> Self {
        Self::from_bytes(key.as_bytes())
    }
}

impl fmt::Display for WideMd5Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_token_golden_values() {
        assert_eq!(Md5Token::from_key("apple"), Md5Token(38271));
        assert_eq!(Md5Token::from_key("NodeA-0"), Md5Token(8304));
        assert_eq!(Md5Token::from_key("NodeB-1"), Md5Token(55662));
        assert_eq!(Md5Token::from_key(""), Md5Token(17022));
    }

    #[test]
    fn test_wide_token_golden_values() {
        assert_eq!(
            WideMd5Token::from_key("apple"),
            WideMd5Token(12962232793075062143)
        );
        assert_eq!(
            WideMd5Token::from_key("NodeA-0"),
            WideMd5Token(6761848519153950832)
        );
    }

    #[test]
    fn test_narrow_token_is_suffix_of_wide() {
        for key in ["apple", "banana", "NodeC-2", "x"] {
            let wide = WideMd5Token::from_key(key).0;
            assert_eq!(Md5Token::from_key(key).0, wide as u16);
        }
    }

    #[test]
    fn test_distance_wraps() {
        assert_eq!(Md5Token(100).distance_to(&Md5Token(300)), Md5Token(200));
        assert_eq!(Md5Token(65500).distance_to(&Md5Token(36)), Md5Token(72));
        assert_eq!(Md5Token::space(), 65536);
    }

    #[test]
    fn test_token_space_sizes() {
        assert_eq!(<Md5Token as Token>::max(), Md5Token(u16::MAX));
        assert_eq!(WideMd5Token::space(), 1u128 << 64);
        assert!(<WideMd5Token as Token>::max().is_max());
    }
}
