use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::enums::ChunkEncoding;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub rsa: RsaConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RsaConfig {
    pub key_bits: usize,
    pub miller_rabin_rounds: usize,
    pub chunk_encoding: ChunkEncoding,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse a TOML document; missing keys take their defaults
pub fn from_toml(content: &str) -> Result<Config, CoreError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a config file
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Config, CoreError> {
    let content = std::fs::read_to_string(path)?;
    from_toml(&content)
}

/// Global config — loaded once, falls back to defaults if missing or unreadable
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            debug!(path = %config_path, "config file not found — using built-in defaults");
            return Config::default();
        }

        from_path(&config_path).unwrap_or_else(|err| {
            warn!(path = %config_path, %err, "ignoring unreadable config — using built-in defaults");
            Config::default()
        })
    })
}
