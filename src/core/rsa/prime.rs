//! Probabilistic prime generation (Miller–Rabin)
//!
//! A candidate that survives every round is only *probably* prime. With 128
//! random witnesses the chance of accepting a composite is at most 4^-128.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::CryptoRng;
use tracing::{debug, trace};

use super::arith::{mod_pow, random_below, random_odd_exact_bits};
use crate::consts::MILLER_RABIN_ROUNDS;
use crate::core::Result;
use crate::error::CoreError;

// Trial divisors; a hit settles the question without any exponentiation.
#[rustfmt::skip]
const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
    73, 79, 83, 89, 97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151,
    157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223, 227, 229, 233,
    239, 241, 251,
];

/// Miller–Rabin with `rounds` witnesses drawn uniformly from `[2, n-2]`
///
/// Values below 5 and even values are classified directly.
pub fn miller_rabin<R: CryptoRng>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    if *n < BigUint::from(5u32) {
        return *n == BigUint::from(2u32) || *n == BigUint::from(3u32);
    }
    if n.is_even() {
        return false;
    }

    let n_minus_1 = n - 1u32;
    let s = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> s;
    let span = n - 3u32;
    let two = BigUint::from(2u32);

    'witness: for _ in 0..rounds {
        let a = random_below(&span, rng) + 2u32;
        let mut x = mod_pow(&a, &d, n);
        if x.is_one() || x == n_minus_1 {
            continue;
        }
        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Trial division by small primes, then Miller–Rabin
pub fn is_probable_prime_with<R: CryptoRng>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        if (n % p).is_zero() {
            return *n == BigUint::from(p);
        }
    }
    miller_rabin(n, rounds, rng)
}

/// 128-round probable-prime test using the thread-local CSPRNG
pub fn is_probable_prime(n: &BigUint) -> bool {
    is_probable_prime_with(n, MILLER_RABIN_ROUNDS, &mut rand::rng())
}

/// Draw `bits`-bit odd candidates until one passes the primality test
pub fn generate_large_prime_with<R: CryptoRng>(
    bits: usize,
    rounds: usize,
    rng: &mut R,
) -> Result<BigUint> {
    if bits < 2 {
        return Err(CoreError::InvalidBitLength(bits));
    }

    let mut candidates = 0u64;
    loop {
        candidates += 1;
        let candidate = random_odd_exact_bits(bits, rng);
        if is_probable_prime_with(&candidate, rounds, rng) {
            debug!(bits, candidates, "found probable prime");
            return Ok(candidate);
        }
        trace!(candidates, "candidate rejected");
    }
}

/// [`generate_large_prime_with`] using 128 rounds and the thread-local CSPRNG
pub fn generate_large_prime(bits: usize) -> Result<BigUint> {
    generate_large_prime_with(bits, MILLER_RABIN_ROUNDS, &mut rand::rng())
}
