// src/key_ops.rs
//! Key generation and representation utilities
//!
//! Random session keys and key-pair hashes are drawn from `[A-Za-z0-9]`
//! with a CSPRNG; RSA keys get their colon-joined hex forms here.

use rand::{CryptoRng, Rng};

use crate::aliases::AesKey16;
use crate::consts::{AES_KEY_LEN, KEY_ALPHABET, KEY_PAIR_HASH_LEN};
use crate::core::rsa::KeyPair;

fn alphabet_byte<R: CryptoRng>(rng: &mut R) -> u8 {
    KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())]
}

/// Random alphanumeric string of `len` characters
pub fn random_alphanumeric<R: CryptoRng>(len: usize, rng: &mut R) -> String {
    (0..len).map(|_| alphabet_byte(rng) as char).collect()
}

pub fn generate_aes_key_with<R: CryptoRng>(rng: &mut R) -> AesKey16 {
    let mut key = [0u8; AES_KEY_LEN];
    for byte in key.iter_mut() {
        *byte = alphabet_byte(rng);
    }
    AesKey16::new(key)
}

/// Generate a new 16-character alphanumeric AES-128 session key
#[inline]
pub fn generate_aes_key() -> AesKey16 {
    generate_aes_key_with(&mut rand::rng())
}

/// Token published next to a public key; a mismatch marks a stale key pair
pub fn generate_key_pair_hash() -> String {
    random_alphanumeric(KEY_PAIR_HASH_LEN, &mut rand::rng())
}

/// String representations of a key pair for storage/transmission
#[derive(Debug, Clone)]
pub struct KeyPairRepr {
    pub public: String,
    pub private: String,
}

pub fn key_pair_representations(pair: &KeyPair) -> KeyPairRepr {
    KeyPairRepr {
        public: pair.public.to_string(),
        private: pair.private.to_string(),
    }
}
