// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout chat-cipher.

pub use secure_gate::fixed_alias;

// Fixed-size secrets
fixed_alias!(AesKey16, 16); // AES-128 session key (16 ASCII bytes), zeroized on drop
