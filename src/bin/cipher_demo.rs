//! Cipher demo — AES round trip, RSA key generation, session-key exchange
//!
//! Usage: `cipher_demo [message]`

use anyhow::{ensure, Context, Result};
use chat_cipher::core::{aes, codec, rsa, session};
use chat_cipher::key_ops::{generate_aes_key, generate_key_pair_hash, key_pair_representations};
use chat_cipher::load_config;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_MESSAGE: &str = "Hello, RSA and AES! This is a test message.";

fn main() -> Result<()> {
    let config = load_config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

    // 1. Symmetric round trip
    let key = generate_aes_key();
    let key_text = std::str::from_utf8(key.expose_secret()).context("session key is ASCII")?;
    info!("Original:  {message}");
    info!("AES key:   {key_text}");

    let ciphertext = aes::encrypt(&message, key.expose_secret())?;
    info!("Encrypted: {ciphertext}");
    let decrypted = aes::decrypt(&ciphertext, key.expose_secret())?;
    info!("Decrypted: {decrypted}");
    ensure!(decrypted == message, "AES round trip mismatch");

    // 2. Key pair
    info!(
        "Generating {}-bit RSA key pair ({} Miller–Rabin rounds)…",
        config.rsa.key_bits, config.rsa.miller_rabin_rounds
    );
    let pair = rsa::generate_key_pair_from_config(&config.rsa)
        .context("key generation failed — retry to draw new primes")?;
    let repr = key_pair_representations(&pair);
    info!("Public key (n:e): {}", repr.public);
    info!("Key-pair hash:    {}", generate_key_pair_hash());

    // 3. Session-key exchange
    let wrapped = session::wrap_session_key(&key, &pair.public)?;
    info!("Wrapped session key: {:?}", codec::chunks_to_hex(&wrapped));
    let unwrapped = session::unwrap_session_key(&wrapped, &pair.private)?;
    ensure!(
        unwrapped.expose_secret() == key.expose_secret(),
        "session key mismatch after unwrap"
    );

    // 4. Direct RSA on the message
    let rsa_ciphertext = rsa::encrypt_from_config(&message, &pair.public, &config.rsa)?;
    info!("RSA ciphertext: {} chunk(s)", rsa_ciphertext.len());
    let rsa_plaintext = rsa::decrypt(&rsa_ciphertext, &pair.private)?;
    info!("RSA decrypted:  {rsa_plaintext}");

    Ok(())
}
