//! Cipher engines and the helpers they share
//!
//! Pure, synchronous and reentrant: nothing here touches storage or the
//! network, and the only external input is the CSPRNG.

pub mod aes;
pub mod codec;
pub mod rsa;
pub mod session;

pub use codec::*;
pub use session::*;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
