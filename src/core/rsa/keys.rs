//! RSA key types and key-pair generation
//!
//! Keys travel as colon-joined lowercase hex: `"<n>:<e>"` for the public
//! half and `"<n>:<d>"` for the private half.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::One;
use rand::CryptoRng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::arith::{gcd, mod_inverse};
use super::prime::generate_large_prime_with;
use crate::consts::{MILLER_RABIN_ROUNDS, RSA_PUBLIC_EXPONENT};
use crate::core::Result;
use crate::error::CoreError;

/// Public half: modulus `n`, exponent `e`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub n: BigUint,
    pub e: BigUint,
}

/// Private half: modulus `n`, exponent `d`
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub n: BigUint,
    pub d: BigUint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl PublicKey {
    pub fn new(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }

    /// Byte length of the modulus
    pub fn modulus_len(&self) -> usize {
        self.n.bits().div_ceil(8) as usize
    }
}

impl PrivateKey {
    pub fn new(n: BigUint, d: BigUint) -> Self {
        Self { n, d }
    }
}

// Keep `d` out of logs.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("n_bits", &self.n.bits())
            .field("d", &"<redacted>")
            .finish()
    }
}

impl KeyPair {
    /// Assemble a key pair from two primes with `e = 65537`
    ///
    /// Fails with [`CoreError::NotCoprime`] when `gcd(e, φ(n)) != 1`; the caller
    /// is expected to draw new primes.
    pub fn from_primes(p: &BigUint, q: &BigUint) -> Result<Self> {
        let two = BigUint::from(2u32);
        if *p < two || *q < two {
            return Err(CoreError::InvalidKeyFormat("primes must be at least 2".into()));
        }

        let e = BigUint::from(RSA_PUBLIC_EXPONENT);
        let n = p * q;
        let phi = (p - 1u32) * (q - 1u32);

        if !gcd(&e, &phi).is_one() {
            return Err(CoreError::NotCoprime);
        }
        let d = mod_inverse(&e, &phi).ok_or(CoreError::NotCoprime)?;

        Ok(Self {
            public: PublicKey::new(n.clone(), e),
            private: PrivateKey::new(n, d),
        })
    }
}

// Below 6 bits there are no two distinct primes of half the size.
fn check_key_bits(bits: usize) -> Result<usize> {
    if bits < 6 || bits % 2 != 0 {
        return Err(CoreError::InvalidBitLength(bits));
    }
    Ok(bits / 2)
}

/// Sequential key generation with an injected CSPRNG
pub fn generate_key_pair_with<R: CryptoRng>(
    bits: usize,
    rounds: usize,
    rng: &mut R,
) -> Result<KeyPair> {
    let half = check_key_bits(bits)?;
    let p = generate_large_prime_with(half, rounds, rng)?;
    let mut q = generate_large_prime_with(half, rounds, rng)?;
    while q == p {
        q = generate_large_prime_with(half, rounds, rng)?;
    }
    debug!(bits, "assembling key pair");
    KeyPair::from_primes(&p, &q)
}

/// Key generation with `p` and `q` searched on two threads
pub fn generate_key_pair_threaded(bits: usize, rounds: usize) -> Result<KeyPair> {
    let half = check_key_bits(bits)?;
    let search = || generate_large_prime_with(half, rounds, &mut rand::rng());

    let (p, q) = std::thread::scope(|scope| {
        let p = scope.spawn(search);
        let q = search();
        let p = p
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        (p, q)
    });

    let (p, mut q) = (p?, q?);
    while q == p {
        q = generate_large_prime_with(half, rounds, &mut rand::rng())?;
    }
    debug!(bits, "assembling key pair");
    KeyPair::from_primes(&p, &q)
}

/// Generate a `bits`-bit key pair with `e = 65537` and 128 Miller–Rabin rounds
pub fn generate_key_pair(bits: usize) -> Result<KeyPair> {
    generate_key_pair_threaded(bits, MILLER_RABIN_ROUNDS)
}

fn parse_pair(s: &str) -> Result<(BigUint, BigUint)> {
    let (left, right) = s
        .split_once(':')
        .ok_or_else(|| CoreError::InvalidKeyFormat("expected `<hex>:<hex>`".into()))?;
    let parse = |part: &str| {
        BigUint::parse_bytes(part.as_bytes(), 16)
            .ok_or_else(|| CoreError::InvalidKeyFormat(format!("not a hex integer: {part:?}")))
    };
    let (modulus, exponent) = (parse(left)?, parse(right)?);
    check_modulus(&modulus)?;
    Ok((modulus, exponent))
}

/// A modulus below 2 leaves no room for any message
pub(crate) fn check_modulus(n: &BigUint) -> Result<()> {
    if *n < BigUint::from(2u32) {
        return Err(CoreError::InvalidKeyFormat(format!(
            "modulus must be at least 2, got {n:x}"
        )));
    }
    Ok(())
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}:{:x}", self.n, self.e)
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}:{:x}", self.n, self.d)
    }
}

impl FromStr for PublicKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let (n, e) = parse_pair(s)?;
        Ok(Self { n, e })
    }
}

impl FromStr for PrivateKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let (n, d) = parse_pair(s)?;
        Ok(Self { n, d })
    }
}

macro_rules! serde_as_colon_hex {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_as_colon_hex!(PublicKey);
serde_as_colon_hex!(PrivateKey);
