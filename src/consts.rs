// src/consts.rs
//! Shared constants — cipher parameters and defaults

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 key length in bytes
pub const AES_KEY_LEN: usize = 16;

/// Number of AES-128 rounds
pub const AES_ROUNDS: usize = 10;

/// Default RSA modulus size in bits
pub const RSA_DEFAULT_BITS: usize = 2048;

/// Fixed RSA public exponent (F4)
pub const RSA_PUBLIC_EXPONENT: u32 = 65_537;

/// Miller–Rabin rounds per candidate
// false-positive probability <= 4^-128
pub const MILLER_RABIN_ROUNDS: usize = 128;

/// Plaintext bytes per RSA chunk
// fixed margin under the 256-byte capacity of a 2048-bit modulus
pub const RSA_MAX_CHUNK_BYTES: usize = 245;

/// RSA message cap in 245-byte chunk units (245,000 bytes)
pub const RSA_MAX_CHUNKS: usize = 1000;

/// Alphabet used for generated session keys and key-pair hashes
pub const KEY_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the token stored alongside a published key pair
pub const KEY_PAIR_HASH_LEN: usize = 32;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "CHAT_CIPHER_CONFIG";

/// Config file used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "chat-cipher.toml";
