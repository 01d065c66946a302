//! Textbook RSA over chunked messages
//!
//! Plaintext is cut into chunks of at most 245 bytes, each chunk is read as
//! a big-endian integer `m` and raised to `e` modulo `n`. Nothing is padded:
//! a plaintext chunk that starts with zero bytes comes back without them.

use num_bigint::BigUint;
use tracing::debug;

use super::arith::mod_pow;
use super::keys::{check_modulus, PrivateKey, PublicKey};
use crate::consts::{RSA_MAX_CHUNKS, RSA_MAX_CHUNK_BYTES};
use crate::core::codec::bytes_to_string;
use crate::core::Result;
use crate::enums::ChunkEncoding;
use crate::error::CoreError;

const MAX_MESSAGE_BYTES: usize = RSA_MAX_CHUNK_BYTES * RSA_MAX_CHUNKS;

/// Split text into chunks of at most `max` bytes without cutting a UTF-8 sequence
fn split_text(text: &str, max: usize) -> Vec<&[u8]> {
    let bytes = text.as_bytes();
    let mut chunks = Vec::with_capacity(bytes.len().div_ceil(max));
    let mut start = 0;
    while start < bytes.len() {
        let mut end = (start + max).min(bytes.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        chunks.push(&bytes[start..end]);
        start = end;
    }
    chunks
}

fn check_message_len(len: usize) -> Result<()> {
    if len == 0 {
        return Err(CoreError::EmptyPlaintext);
    }
    if len > MAX_MESSAGE_BYTES {
        return Err(CoreError::MessageTooLong {
            len,
            max: MAX_MESSAGE_BYTES,
        });
    }
    Ok(())
}

fn encrypt_chunks(
    chunks: &[&[u8]],
    key: &PublicKey,
    encoding: ChunkEncoding,
) -> Result<Vec<Vec<u8>>> {
    check_modulus(&key.n)?;

    let width = key.modulus_len();
    let mut out = Vec::with_capacity(chunks.len());
    for (index, chunk) in chunks.iter().enumerate() {
        let m = BigUint::from_bytes_be(chunk);
        if m >= key.n {
            return Err(CoreError::ChunkExceedsModulus { index });
        }

        let mut bytes = mod_pow(&m, &key.e, &key.n).to_bytes_be();
        if encoding == ChunkEncoding::FixedWidth && bytes.len() < width {
            let mut padded = vec![0u8; width - bytes.len()];
            padded.append(&mut bytes);
            bytes = padded;
        }
        out.push(bytes);
    }

    debug!(chunks = out.len(), ?encoding, "rsa encrypt");
    Ok(out)
}

/// Encrypt UTF-8 text with the default (minimal-width) chunk encoding
pub fn encrypt(plaintext: &str, key: &PublicKey) -> Result<Vec<Vec<u8>>> {
    encrypt_with_encoding(plaintext, key, ChunkEncoding::Minimal)
}

pub fn encrypt_with_encoding(
    plaintext: &str,
    key: &PublicKey,
    encoding: ChunkEncoding,
) -> Result<Vec<Vec<u8>>> {
    check_message_len(plaintext.len())?;
    encrypt_chunks(&split_text(plaintext, RSA_MAX_CHUNK_BYTES), key, encoding)
}

/// Encrypt arbitrary bytes; chunk boundaries fall every 245 bytes
pub fn encrypt_bytes(
    plaintext: &[u8],
    key: &PublicKey,
    encoding: ChunkEncoding,
) -> Result<Vec<Vec<u8>>> {
    check_message_len(plaintext.len())?;
    let chunks: Vec<&[u8]> = plaintext.chunks(RSA_MAX_CHUNK_BYTES).collect();
    encrypt_chunks(&chunks, key, encoding)
}

fn decrypt_chunk(index: usize, chunk: &[u8], key: &PrivateKey) -> Result<Vec<u8>> {
    if chunk.is_empty() {
        return Err(CoreError::EmptyChunk { index });
    }
    check_modulus(&key.n)?;
    let c = BigUint::from_bytes_be(chunk);
    Ok(mod_pow(&c, &key.d, &key.n).to_bytes_be())
}

/// Decrypt each chunk in order and concatenate the raw bytes
pub fn decrypt_bytes<C: AsRef<[u8]>>(chunks: &[C], key: &PrivateKey) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for (index, chunk) in chunks.iter().enumerate() {
        out.extend(decrypt_chunk(index, chunk.as_ref(), key)?);
    }
    Ok(out)
}

/// Decrypt each chunk in order, decoding every chunk as UTF-8
pub fn decrypt<C: AsRef<[u8]>>(chunks: &[C], key: &PrivateKey) -> Result<String> {
    let mut plaintext = String::new();
    for (index, chunk) in chunks.iter().enumerate() {
        let bytes = decrypt_chunk(index, chunk.as_ref(), key)?;
        plaintext.push_str(&bytes_to_string(bytes)?);
    }
    debug!(chunks = chunks.len(), "rsa decrypt");
    Ok(plaintext)
}
