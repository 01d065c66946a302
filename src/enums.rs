// src/enums.rs
//! Public enum types used throughout the crate

use serde::{Deserialize, Serialize};

/// Byte layout of each RSA ciphertext chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ChunkEncoding {
    /// Shortest big-endian form of the chunk integer (wire-compatible default)
    #[default]
    Minimal,
    /// Left-padded with zeros to the byte length of the modulus
    FixedWidth,
}
