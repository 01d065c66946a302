// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Key must be exactly {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid hex character {c:?} at index {index}")]
    InvalidHexCharacter { c: char, index: usize },

    #[error("Hex string must have an even number of characters, got {0}")]
    OddHexLength(usize),

    #[error("Ciphertext length {0} is not a multiple of 16 bytes")]
    InvalidCiphertextLength(usize),

    #[error("Invalid padding length: {0}")]
    InvalidPaddingLength(u8),

    #[error("Invalid padding values for pad length {0}")]
    InvalidPaddingBytes(u8),

    #[error("Decrypted bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Plaintext must not be empty")]
    EmptyPlaintext,

    #[error("Message too long: {len} bytes, maximum is {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("Plaintext chunk {index} is not smaller than the modulus")]
    ChunkExceedsModulus { index: usize },

    #[error("Invalid ciphertext chunk {index}: empty buffer")]
    EmptyChunk { index: usize },

    #[error("Public exponent and phi(n) are not coprime — regenerate the key pair")]
    NotCoprime,

    #[error("Cannot generate a prime of {0} bits")]
    InvalidBitLength(usize),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
