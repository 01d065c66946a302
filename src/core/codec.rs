//! Text, byte and hex conversions shared by both engines
//!
//! Hex is always lowercase, two digits per byte, no separators.

use hex::FromHexError;

use super::Result;
use crate::error::CoreError;

/// UTF-8 encode a string
#[inline]
pub fn string_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode bytes as UTF-8, failing on invalid sequences
pub fn bytes_to_string(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}

/// Lowercase hex, two digits per byte
#[inline]
pub fn bytes_to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Parse a hex string (either case)
///
/// Non-hex characters are reported before odd length.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    if let Some((index, c)) = hex.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(CoreError::InvalidHexCharacter { c, index });
    }
    hex::decode(hex).map_err(|err| match err {
        FromHexError::InvalidHexCharacter { c, index } => {
            CoreError::InvalidHexCharacter { c, index }
        }
        _ => CoreError::OddHexLength(hex.len()),
    })
}

/// Hex form of an RSA chunk list, order preserved
pub fn chunks_to_hex(chunks: &[Vec<u8>]) -> Vec<String> {
    chunks.iter().map(|c| bytes_to_hex(c)).collect()
}

/// Inverse of [`chunks_to_hex`]
pub fn chunks_from_hex<S: AsRef<str>>(chunks: &[S]) -> Result<Vec<Vec<u8>>> {
    chunks.iter().map(|c| hex_to_bytes(c.as_ref())).collect()
}
