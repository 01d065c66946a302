//! Block-cipher engine — AES-128, 10 rounds
//!
//! Each 16-byte block is enciphered independently (no chaining, no IV).
//! Text is padded PKCS#7-style: `16 - len % 16` bytes of that value are
//! always appended, so an input that is already block-aligned gains a full
//! extra block.

mod key_schedule;
mod state;
pub mod tables;

pub use key_schedule::{expand_key, RoundKeys};
pub use state::{gf_mul, xtime, State};

use tracing::trace;

use super::codec::{bytes_to_hex, bytes_to_string, hex_to_bytes};
use super::Result;
use crate::consts::{AES_BLOCK_SIZE, AES_KEY_LEN, AES_ROUNDS};
use crate::error::CoreError;

/// Reject anything that is not exactly 16 key bytes
pub fn key_from_slice(key: &[u8]) -> Result<[u8; AES_KEY_LEN]> {
    key.try_into().map_err(|_| CoreError::InvalidKeyLength {
        expected: AES_KEY_LEN,
        actual: key.len(),
    })
}

/// Raw single-block encryption, no padding
pub fn encrypt_block(block: &[u8; AES_BLOCK_SIZE], keys: &RoundKeys) -> [u8; AES_BLOCK_SIZE] {
    let mut state = State::from_block(block);
    state.add_round_key(keys.round(0));

    for round in 1..AES_ROUNDS {
        state.sub_bytes();
        state.shift_rows();
        state.mix_columns();
        state.add_round_key(keys.round(round));
    }

    state.sub_bytes();
    state.shift_rows();
    state.add_round_key(keys.round(AES_ROUNDS));
    state.to_block()
}

/// Raw single-block decryption, no padding
pub fn decrypt_block(block: &[u8; AES_BLOCK_SIZE], keys: &RoundKeys) -> [u8; AES_BLOCK_SIZE] {
    let mut state = State::from_block(block);
    state.add_round_key(keys.round(AES_ROUNDS));
    state.inv_shift_rows();
    state.inv_sub_bytes();

    for round in (1..AES_ROUNDS).rev() {
        state.add_round_key(keys.round(round));
        state.inv_mix_columns();
        state.inv_shift_rows();
        state.inv_sub_bytes();
    }

    state.add_round_key(keys.round(0));
    state.to_block()
}

/// Append `16 - len % 16` bytes, each holding the pad length
pub fn pad(input: &[u8]) -> Vec<u8> {
    let pad_len = AES_BLOCK_SIZE - input.len() % AES_BLOCK_SIZE;
    let mut padded = Vec::with_capacity(input.len() + pad_len);
    padded.extend_from_slice(input);
    padded.resize(input.len() + pad_len, pad_len as u8);
    padded
}

/// Strip and validate padding added by [`pad`]
pub fn unpad(mut bytes: Vec<u8>) -> Result<Vec<u8>> {
    let pad_len = bytes.last().copied().unwrap_or(0);
    if pad_len == 0 || pad_len as usize > AES_BLOCK_SIZE || pad_len as usize > bytes.len() {
        return Err(CoreError::InvalidPaddingLength(pad_len));
    }

    let start = bytes.len() - pad_len as usize;
    if bytes[start..].iter().any(|&b| b != pad_len) {
        return Err(CoreError::InvalidPaddingBytes(pad_len));
    }

    bytes.truncate(start);
    Ok(bytes)
}

/// Pad and encrypt raw bytes block by block
pub fn encrypt_bytes(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let keys = expand_key(&key_from_slice(key)?);
    let padded = pad(plaintext);

    let mut out = Vec::with_capacity(padded.len());
    let mut block = [0u8; AES_BLOCK_SIZE];
    for chunk in padded.chunks_exact(AES_BLOCK_SIZE) {
        block.copy_from_slice(chunk);
        out.extend_from_slice(&encrypt_block(&block, &keys));
    }

    trace!(blocks = out.len() / AES_BLOCK_SIZE, "aes encrypt");
    Ok(out)
}

/// Decrypt raw bytes block by block and strip the padding
pub fn decrypt_bytes(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let keys = expand_key(&key_from_slice(key)?);
    if ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(CoreError::InvalidCiphertextLength(ciphertext.len()));
    }

    let mut out = Vec::with_capacity(ciphertext.len());
    let mut block = [0u8; AES_BLOCK_SIZE];
    for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
        block.copy_from_slice(chunk);
        out.extend_from_slice(&decrypt_block(&block, &keys));
    }

    trace!(blocks = out.len() / AES_BLOCK_SIZE, "aes decrypt");
    unpad(out)
}

/// Encrypt UTF-8 text → lowercase hex ciphertext
pub fn encrypt(plaintext: &str, key: impl AsRef<[u8]>) -> Result<String> {
    let ciphertext = encrypt_bytes(plaintext.as_bytes(), key.as_ref())?;
    Ok(bytes_to_hex(ciphertext))
}

/// Decrypt hex ciphertext → UTF-8 text
pub fn decrypt(ciphertext_hex: &str, key: impl AsRef<[u8]>) -> Result<String> {
    let key = key_from_slice(key.as_ref())?;
    let ciphertext = hex_to_bytes(ciphertext_hex)?;
    let plaintext = decrypt_bytes(&ciphertext, &key)?;
    bytes_to_string(plaintext)
}
