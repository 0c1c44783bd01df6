//! MD5 partitioners.

use crate::partitioner::traits::Partitioner;
use crate::token::md5::{Md5Token, WideMd5Token};
use crate::token::Token;

/// MD5 partitioner over a 16-bit token space.
///
/// This is the default partitioner. The narrow space keeps ring dumps
/// readable and matches existing golden outputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Partitioner;

impl Partitioner for Md5Partitioner {
    type TokenType = Md5Token;

    fn partition(&self, key: &[u8]) -> Self::TokenType {
        Md5Token::from_bytes(key)
    }

    fn min_token(&self) -> Self::TokenType {
        Md5Token::zero()
    }

    fn max_token(&self) -> Self::TokenType {
        <Md5Token as Token>::max()
    }

    fn name(&self) -> &'static str {
        "Md5Partitioner"
    }
}

/// MD5 partitioner over a 64-bit token space.
#[derive(Clone, Copy, Debug, Default)]
pub struct WideMd5Partitioner;

impl Partitioner for WideMd5Partitioner {
    type TokenType = WideMd5Token;

    fn partition(&self, key: &[u8]) -> Self::TokenType {
        WideMd5Token::from_bytes(key)
    }

    fn min_token(&self) -> Self::TokenType {
        WideMd5Token::zero()
    }

    fn max_token(&self) -> Self::TokenType {
        <WideMd5Token as Token>::max()
    }

    fn name(&self) -> &'static str {
        "WideMd5Partitioner"
    }
}
