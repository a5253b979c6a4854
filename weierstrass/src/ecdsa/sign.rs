//! ECDSA signing

use super::Signature;
use crate::{
    AffinePoint, Curve, Result, SecretKey,
    field::{mod_inverse, reduce},
    hash::hash_and_truncate,
    secret_key::NonceSource,
};
use num_bigint::BigInt;
use num_traits::Zero;

/// Sign `message` with `secret_key`, returning the signer's public key
/// alongside the signature so a verifier need not look it up elsewhere.
///
/// Computes `z = hash_and_truncate(message, n)`, `r = (k·G).x mod n` and
/// `s = k⁻¹·(z + r·d) mod n`. When the nonce `k` yields `r = 0` or `s = 0` the
/// next nonce is requested from `nonces`; a fixed `&Nonce` has no next nonce
/// and fails with [`Error::DegenerateNonce`](crate::Error::DegenerateNonce).
pub fn sign(
    message: &str,
    curve: &Curve,
    mut nonces: impl NonceSource,
    secret_key: &SecretKey,
    public_key: &AffinePoint,
) -> Result<(AffinePoint, Signature)> {
    let n = curve.order();
    let d = secret_key.secret_scalar();
    let z = hash_and_truncate(message, n);
    let mut attempt = 0;

    loop {
        let nonce = nonces.nonce(curve, attempt)?;
        attempt += 1;

        if let Some((r, s)) = try_sign(curve, nonce.secret_scalar(), d, &z) {
            return Ok((public_key.clone(), Signature { r, s }));
        }
    }
}

/// Compute `(r, s)` for the given nonce, or `None` if either is zero or the
/// nonce is not invertible.
#[allow(clippy::many_single_char_names)]
fn try_sign(curve: &Curve, k: &BigInt, d: &BigInt, z: &BigInt) -> Option<(BigInt, BigInt)> {
    let n = curve.order();

    // Lift the x-coordinate of k×G into the scalar field
    let r = reduce(curve.mul_base(k).x()?, n);
    if r.is_zero() {
        return None;
    }

    let k_inv = mod_inverse(k, n).ok()?;
    let s = reduce(&(k_inv * (z + &r * d)), n);
    if s.is_zero() {
        return None;
    }

    Some((r, s))
}
