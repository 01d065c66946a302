//! Asymmetric engine — textbook RSA with probabilistic prime generation
//!
//! No OAEP or PKCS#1 padding: ciphertext is raw `m^e mod n` per chunk.
//! Callers use it to wrap short session keys, not bulk data.

mod arith;
mod chunk;
mod keys;
mod prime;

pub use arith::{gcd, mod_inverse, mod_pow};
pub use chunk::{decrypt, decrypt_bytes, encrypt, encrypt_bytes, encrypt_with_encoding};
pub use keys::{
    generate_key_pair, generate_key_pair_threaded, generate_key_pair_with, KeyPair, PrivateKey,
    PublicKey,
};
pub use prime::{
    generate_large_prime, generate_large_prime_with, is_probable_prime, is_probable_prime_with,
    miller_rabin,
};

use crate::config::RsaConfig;
use crate::core::Result;

/// Key generation driven by the `[rsa]` config section
pub fn generate_key_pair_from_config(config: &RsaConfig) -> Result<KeyPair> {
    generate_key_pair_threaded(config.key_bits, config.miller_rabin_rounds)
}

/// Encryption using the configured chunk encoding
pub fn encrypt_from_config(
    plaintext: &str,
    key: &PublicKey,
    config: &RsaConfig,
) -> Result<Vec<Vec<u8>>> {
    encrypt_with_encoding(plaintext, key, config.chunk_encoding)
}
