//! Big-integer helpers: modular exponentiation, inverses, random draws

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::CryptoRng;

/// `base^exp mod modulus` by right-to-left square-and-multiply
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let bits = exp.bits();
    for i in 0..bits {
        if exp.bit(i) {
            result = result * &base % modulus;
        }
        if i + 1 < bits {
            base = &base * &base % modulus;
        }
    }
    result
}

/// Inverse of `a` modulo `m` via the extended Euclidean algorithm
///
/// Returns `None` when `gcd(a, m) != 1`. The result is normalised into `[0, m)`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }

    let modulus = BigInt::from(m.clone());
    let (mut old_r, mut r) = (BigInt::from(a % m), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }
    old_s.mod_floor(&modulus).to_biguint()
}

/// `gcd(a, b)`
#[inline]
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Uniform draw from `[0, bound)` by rejection sampling; `bound` must be non-zero
pub(crate) fn random_below<R: CryptoRng>(bound: &BigUint, rng: &mut R) -> BigUint {
    debug_assert!(!bound.is_zero());
    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;

    let mut buf = vec![0u8; len];
    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xff >> excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < bound {
            return candidate;
        }
    }
}

/// Random odd integer of exactly `bits` bits (top and bottom bit set); `bits >= 2`
pub(crate) fn random_odd_exact_bits<R: CryptoRng>(bits: usize, rng: &mut R) -> BigUint {
    let len = bits.div_ceil(8);
    let excess = (len * 8 - bits) as u32;

    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf[0] &= 0xff >> excess;
    buf[0] |= 0x80 >> excess;
    buf[len - 1] |= 1;
    BigUint::from_bytes_be(&buf)
}
