//! Session-key exchange between chat peers
//!
//! A fresh AES-128 key encrypts the chat payloads; that key is wrapped with
//! each participant's RSA public key so only the holder of the matching
//! private key can recover it. Storage and transport stay with the caller.

use tracing::debug;

use super::{aes, rsa, Result};
use crate::aliases::AesKey16;
use crate::consts::AES_KEY_LEN;
use crate::enums::ChunkEncoding;
use crate::error::CoreError;

/// Wrap a session key for the owner of `peer`
pub fn wrap_session_key(key: &AesKey16, peer: &rsa::PublicKey) -> Result<Vec<Vec<u8>>> {
    rsa::encrypt_bytes(key.expose_secret(), peer, ChunkEncoding::Minimal)
}

/// Recover a session key wrapped by [`wrap_session_key`]
///
/// Anything that does not decrypt to exactly 16 bytes is rejected.
pub fn unwrap_session_key<C: AsRef<[u8]>>(
    wrapped: &[C],
    private: &rsa::PrivateKey,
) -> Result<AesKey16> {
    let bytes = rsa::decrypt_bytes(wrapped, private)?;
    let key = <[u8; AES_KEY_LEN]>::try_from(bytes.as_slice()).map_err(|_| {
        CoreError::InvalidKeyLength {
            expected: AES_KEY_LEN,
            actual: bytes.len(),
        }
    })?;
    debug!("session key unwrapped");
    Ok(AesKey16::new(key))
}

/// Encrypt one chat message under the session key → hex
pub fn encrypt_message(plaintext: &str, key: &AesKey16) -> Result<String> {
    aes::encrypt(plaintext, key.expose_secret())
}

/// Decrypt one hex chat message under the session key
pub fn decrypt_message(ciphertext_hex: &str, key: &AesKey16) -> Result<String> {
    aes::decrypt(ciphertext_hex, key.expose_secret())
}
