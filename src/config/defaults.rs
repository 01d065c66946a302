use crate::config::app::{LoggingConfig, RsaConfig};
use crate::consts::{MILLER_RABIN_ROUNDS, RSA_DEFAULT_BITS};
use crate::enums::ChunkEncoding;

pub const DEFAULT_LOG_FILTER: &str = "info";

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            key_bits: RSA_DEFAULT_BITS,
            miller_rabin_rounds: MILLER_RABIN_ROUNDS,
            chunk_encoding: ChunkEncoding::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}
