//! Secret key recovery from two signatures sharing a nonce.
//!
//! With the same nonce `k`, two signatures share `r = (k·G).x mod n` and
//! satisfy `sᵢ·k ≡ zᵢ + r·d (mod n)`. Subtracting the two equations gives
//!
//! ```text
//! k = (z₁ − z₂) · (s₁ − s₂)⁻¹ mod n
//! d = (s₁·k − z₁) · r⁻¹ mod n
//! ```

use super::Signature;
use crate::{
    Curve, Error, Nonce, Result, SecretKey,
    field::{mod_inverse, reduce},
    hash::hash_and_truncate,
};
use num_bigint::BigInt;

/// Recover the shared nonce from the message hashes and `s` components of two
/// signatures made with it.
///
/// Fails with [`Error::Arithmetic`] if `s₁ ≡ s₂ (mod n)`.
pub fn recover_nonce(
    z1: &BigInt,
    s1: &BigInt,
    z2: &BigInt,
    s2: &BigInt,
    n: &BigInt,
) -> Result<BigInt> {
    let s_diff_inv = mod_inverse(&(s1 - s2), n)?;
    Ok(reduce(&((z1 - z2) * s_diff_inv), n))
}

/// Recover the nonce and secret key behind two signatures over different
/// messages.
///
/// Fails with [`Error::Validation`] if the signatures do not share `r` (so
/// were not made with the same nonce) or the recovered values are out of
/// range, and with [`Error::Arithmetic`] if their `s` components coincide.
pub fn recover_secret_key(
    curve: &Curve,
    (message1, sig1): (&str, &Signature),
    (message2, sig2): (&str, &Signature),
) -> Result<(Nonce, SecretKey)> {
    let n = curve.order();

    if sig1.r() != sig2.r() {
        return Err(Error::Validation);
    }

    let z1 = hash_and_truncate(message1, n);
    let z2 = hash_and_truncate(message2, n);
    let k = recover_nonce(&z1, sig1.s(), &z2, sig2.s(), n)?;

    let r_inv = mod_inverse(sig1.r(), n)?;
    let d = reduce(&((sig1.s() * &k - z1) * r_inv), n);

    Ok((Nonce::new(k, curve)?, SecretKey::new(d, curve)?))
}
