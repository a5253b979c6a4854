//! Modular arithmetic over prime moduli.
//!
//! Field elements and scalars are arbitrary-precision [`BigInt`]s which the
//! operation producing them keeps reduced into `[0, m)`. Intermediate values
//! may go negative (e.g. `y₂ - y₁`), so everything routes through [`reduce`].

use crate::{Error, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Least non-negative residue of `a` modulo `m`.
///
/// `m` must be positive.
pub fn reduce(a: &BigInt, m: &BigInt) -> BigInt {
    debug_assert!(m.is_positive(), "modulus must be positive");

    let r = a % m;
    if r.is_negative() { r + m } else { r }
}

/// Compute `b` such that `a·b ≡ 1 (mod m)`.
///
/// `a` is first reduced into `[0, m)`, so negative inputs are accepted.
///
/// # Errors
///
/// [`Error::Arithmetic`] if `a ≡ 0 (mod m)` or otherwise shares a factor with
/// `m`, or if `m ≤ 1`.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Result<BigInt> {
    if m <= &BigInt::one() {
        return Err(Error::Arithmetic);
    }

    let a = reduce(a, m);
    if a.is_zero() {
        return Err(Error::Arithmetic);
    }

    a.modinv(m).ok_or(Error::Arithmetic)
}
