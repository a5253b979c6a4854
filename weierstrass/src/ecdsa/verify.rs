//! ECDSA verification

use super::Signature;
use crate::{
    AffinePoint, Curve, Error, Result,
    field::{mod_inverse, reduce},
    hash::hash_and_truncate,
};

/// Verify `signature` over `message` against `public_key`.
///
/// Total: every failure, including a non-invertible `s`, is reported as
/// `false`. See [`try_verify`] for the checks performed.
pub fn verify(
    message: &str,
    curve: &Curve,
    public_key: &AffinePoint,
    signature: &Signature,
) -> bool {
    try_verify(message, curve, public_key, signature).is_ok()
}

/// Verify `signature` over `message` against `public_key`, reporting why it
/// was rejected.
///
/// - [`Error::Validation`] if the public key is the identity, is not on the
///   curve, or is not annihilated by `n`; if `r > n` or `s > n`; or if the
///   signature does not match.
/// - [`Error::Arithmetic`] if `s` has no inverse modulo `n`.
///
/// The range check is `r > n` rather than `r ≥ n`: `r = n` and `s = n` pass it
/// and are rejected later by the arithmetic instead. Negative components pass
/// it too and are used as their residues modulo `n`.
pub fn try_verify(
    message: &str,
    curve: &Curve,
    public_key: &AffinePoint,
    signature: &Signature,
) -> Result<()> {
    let n = curve.order();
    let Signature { r, s } = signature;

    if public_key.is_identity() || !curve.contains(public_key) {
        return Err(Error::Validation);
    }

    // Q must lie in the subgroup generated by G
    if !curve.mul(public_key, n).is_identity() {
        return Err(Error::Validation);
    }

    if r > n || s > n {
        return Err(Error::Validation);
    }

    let z = hash_and_truncate(message, n);
    let w = mod_inverse(s, n)?;
    let u1 = reduce(&(z * &w), n);
    let u2 = reduce(&(r * &w), n);

    let c = curve.add(&curve.mul_base(&u1), &curve.mul(public_key, &u2));

    match c.x() {
        Some(x) if reduce(r, n) == reduce(x, n) => Ok(()),
        _ => Err(Error::Validation),
    }
}

#[cfg(test)]
mod tests {
    use super::{try_verify, verify};
    use crate::{AffinePoint, Curve, Error, ecdsa::Signature};

    fn toy_curve() -> Curve {
        Curve::new(0, 0, 7, 211, AffinePoint::new(3, 33), 199).unwrap()
    }

    /// Public key for `d = 7`.
    fn toy_key() -> AffinePoint {
        AffinePoint::new(66, 11)
    }

    #[test]
    fn toy_vector() {
        let curve = toy_curve();
        let sig = Signature::new(51, 29);
        assert!(verify("alice.txt", &curve, &toy_key(), &sig));
        assert!(!verify("bob.txt", &curve, &toy_key(), &sig));
    }

    #[test]
    fn rejects_bad_public_keys() {
        let curve = toy_curve();
        let sig = Signature::new(51, 29);

        assert_eq!(
            try_verify("alice.txt", &curve, &AffinePoint::Identity, &sig),
            Err(Error::Validation)
        );
        assert_eq!(
            try_verify("alice.txt", &curve, &AffinePoint::new(66, 12), &sig),
            Err(Error::Validation)
        );
    }

    #[test]
    fn rejects_key_outside_subgroup() {
        // Claim n = 3 for G: then n·Q ≠ ∞ for Q = 7·G
        let curve = Curve::new(0, 0, 7, 211, AffinePoint::new(3, 33), 3).unwrap();
        assert_eq!(
            try_verify("alice.txt", &curve, &toy_key(), &Signature::new(1, 1)),
            Err(Error::Validation)
        );
    }

    #[test]
    fn range_boundaries() {
        let curve = toy_curve();

        for sig in [
            Signature::new(199, 29),
            Signature::new(200, 29),
            Signature::new(51 + 199, 29),
            Signature::new(51, 200),
            Signature::new(51, 29 + 199),
        ] {
            assert!(!verify("alice.txt", &curve, &toy_key(), &sig), "{sig}");
        }
    }

    #[test]
    fn r_equal_to_order_passes_range_check() {
        // 59·G = (199, 38) and z("flag.txt") = 67 = 18·59 (mod 199): with
        // u₂ = r·w ≡ 0 the key drops out and C = 59·G
        let curve = toy_curve();
        assert!(verify("flag.txt", &curve, &toy_key(), &Signature::new(199, 18)));
        assert!(verify("flag.txt", &curve, &toy_key(), &Signature::new(0, 18)));
        assert!(!verify("flag.txt", &curve, &toy_key(), &Signature::new(200, 18)));
    }

    #[test]
    fn non_invertible_s() {
        let curve = toy_curve();
        assert_eq!(
            try_verify("alice.txt", &curve, &toy_key(), &Signature::new(51, 199)),
            Err(Error::Arithmetic)
        );
        assert_eq!(
            try_verify("alice.txt", &curve, &toy_key(), &Signature::new(51, 0)),
            Err(Error::Arithmetic)
        );
        assert!(!verify("alice.txt", &curve, &toy_key(), &Signature::default()));
    }

    #[test]
    fn negative_components_use_residues() {
        let curve = toy_curve();
        assert!(verify(
            "alice.txt",
            &curve,
            &toy_key(),
            &Signature::new(51, 29 - 199)
        ));
    }
}
