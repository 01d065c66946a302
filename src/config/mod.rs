//! Configuration system for chat-cipher
//!
//! Central, lazy-loaded global config from TOML, with the path taken from
//! `CHAT_CIPHER_CONFIG`. The engines never read it themselves.

pub use app::{from_path, from_toml, load, Config, LoggingConfig, RsaConfig};
pub use defaults::DEFAULT_LOG_FILTER;

mod app;
mod defaults;
