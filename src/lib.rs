// src/lib.rs
//! chat-cipher — AES-128 and textbook RSA for end-to-end encrypted chat
//!
//! Features:
//! - AES-128 (10 rounds) over independent 16-byte blocks, PKCS#7-style padding
//! - RSA key generation with Miller–Rabin (128 rounds), e = 65537
//! - Chunked, unpadded RSA for wrapping session keys
//! - Lowercase hex wire format

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod key_ops;

// Re-export everything users need at the crate root
pub use aliases::AesKey16;
pub use config::load as load_config;
pub use core::rsa::{generate_key_pair, KeyPair, PrivateKey, PublicKey};
pub use core::{unwrap_session_key, wrap_session_key, Result as CoreResult};
pub use enums::ChunkEncoding;
pub use error::CoreError;
pub use key_ops::{generate_aes_key, generate_key_pair_hash};
