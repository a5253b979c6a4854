//! Secret keys and ECDSA nonces: private scalars in `[1, n)`.

use crate::{AffinePoint, Curve, Error, Result};
use alloc::vec;
use core::{fmt, str::FromStr};
use num_bigint::{BigInt, BigUint};
use rand_core::CryptoRng;

#[cfg(feature = "std")]
use rand_core::{OsRng, TryRngCore};

/// Secret key: the private scalar `d ∈ [1, n)`.
///
/// The matching public key `Q = d·G` is recomputed on demand with
/// [`SecretKey::public_key`].
#[derive(Clone, Eq, PartialEq)]
pub struct SecretKey {
    scalar: BigInt,
}

impl SecretKey {
    /// Create a secret key from a scalar, checking it lies in `[1, n)`.
    pub fn new(scalar: impl Into<BigInt>, curve: &Curve) -> Result<Self> {
        let scalar = scalar.into();

        if curve.is_valid_scalar(&scalar) {
            Ok(Self { scalar })
        } else {
            Err(Error::Validation)
        }
    }

    /// Parse a secret key from a base-10 string. Surrounding whitespace is
    /// ignored.
    pub fn from_decimal(s: &str, curve: &Curve) -> Result<Self> {
        Self::new(BigInt::from_str(s.trim())?, curve)
    }

    /// Generate a uniformly random secret key.
    pub fn random<R: CryptoRng + ?Sized>(curve: &Curve, rng: &mut R) -> Self {
        Self {
            scalar: random_scalar(curve, rng),
        }
    }

    /// Expose the secret scalar value this [`SecretKey`] wraps
    pub fn secret_scalar(&self) -> &BigInt {
        &self.scalar
    }

    /// Compute the public key `d·G`.
    pub fn public_key(&self, curve: &Curve) -> AffinePoint {
        curve.mul_base(&self.scalar)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

/// ECDSA nonce: the ephemeral scalar `k ∈ [1, n)`.
///
/// Signing every message with the same nonce leaks the secret key; see
/// [`ecdsa::nonce_reuse`](crate::ecdsa::nonce_reuse).
#[derive(Clone, Eq, PartialEq)]
pub struct Nonce {
    scalar: BigInt,
}

impl Nonce {
    /// Create a nonce from a scalar, checking it lies in `[1, n)`.
    pub fn new(scalar: impl Into<BigInt>, curve: &Curve) -> Result<Self> {
        let scalar = scalar.into();

        if curve.is_valid_scalar(&scalar) {
            Ok(Self { scalar })
        } else {
            Err(Error::Validation)
        }
    }

    /// Draw a uniformly random nonce from `rng`.
    pub fn random<R: CryptoRng + ?Sized>(curve: &Curve, rng: &mut R) -> Self {
        Self {
            scalar: random_scalar(curve, rng),
        }
    }

    /// Draw a uniformly random nonce from the operating system's
    /// cryptographically secure random number generator.
    #[cfg(feature = "std")]
    pub fn generate(curve: &Curve) -> Result<Self> {
        let mut rng = OsRng;
        let mut buf = vec![0u8; scalar_len(curve)];

        loop {
            rng.try_fill_bytes(&mut buf).map_err(|_| Error::Rng)?;

            if let Some(scalar) = scalar_from_bytes(curve, &mut buf) {
                return Ok(Self { scalar });
            }
        }
    }

    /// Expose the secret scalar value this [`Nonce`] wraps
    pub fn secret_scalar(&self) -> &BigInt {
        &self.scalar
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nonce").finish_non_exhaustive()
    }
}

/// Source of nonces for the signing retry loop.
///
/// [`sign`](crate::ecdsa::sign) asks for a nonce once per attempt; `attempt`
/// counts from zero. An attempt beyond zero happens only when the previous
/// nonce produced `r = 0` or `s = 0`.
pub trait NonceSource {
    /// Get the nonce for the given signing attempt.
    fn nonce(&mut self, curve: &Curve, attempt: usize) -> Result<Nonce>;
}

/// A fixed nonce is good for exactly one attempt: retrying with the same
/// value would produce the same degenerate signature forever.
impl NonceSource for &Nonce {
    fn nonce(&mut self, _curve: &Curve, attempt: usize) -> Result<Nonce> {
        if attempt == 0 {
            Ok((*self).clone())
        } else {
            Err(Error::DegenerateNonce)
        }
    }
}

/// Fresh uniformly random nonce for every attempt.
#[derive(Debug)]
pub struct RandomNonce<R>(pub R);

impl<R: CryptoRng> NonceSource for RandomNonce<R> {
    fn nonce(&mut self, curve: &Curve, _attempt: usize) -> Result<Nonce> {
        Ok(Nonce::random(curve, &mut self.0))
    }
}

/// Number of bytes needed to hold a scalar modulo `n`.
fn scalar_len(curve: &Curve) -> usize {
    curve.order().bits().div_ceil(8) as usize
}

/// Rejection-sample a scalar in `[1, n)`.
fn random_scalar<R: CryptoRng + ?Sized>(curve: &Curve, rng: &mut R) -> BigInt {
    let mut buf = vec![0u8; scalar_len(curve)];

    loop {
        rng.fill_bytes(&mut buf);

        if let Some(scalar) = scalar_from_bytes(curve, &mut buf) {
            return scalar;
        }
    }
}

/// Mask `buf` down to the bit length of `n` and accept it if it lands in
/// `[1, n)`.
fn scalar_from_bytes(curve: &Curve, buf: &mut [u8]) -> Option<BigInt> {
    let excess_bits = buf.len() as u64 * 8 - curve.order().bits();
    if let Some(first) = buf.first_mut() {
        *first &= 0xFFu8 >> excess_bits;
    }

    let scalar = BigInt::from(BigUint::from_bytes_be(buf));
    curve.is_valid_scalar(&scalar).then_some(scalar)
}

#[cfg(test)]
mod tests {
    use super::{Nonce, NonceSource, RandomNonce, SecretKey};
    use crate::{AffinePoint, Curve, Error};
    use alloc::format;
    use num_bigint::BigInt;
    use rand_core::{OsRng, TryRngCore};

    fn toy_curve() -> Curve {
        Curve::new(0, 0, 7, 211, AffinePoint::new(3, 33), 199).unwrap()
    }

    #[test]
    fn range_checks() {
        let curve = toy_curve();
        assert_eq!(SecretKey::new(0, &curve), Err(Error::Validation));
        assert_eq!(SecretKey::new(199, &curve), Err(Error::Validation));
        assert_eq!(SecretKey::new(-1, &curve), Err(Error::Validation));
        assert!(SecretKey::new(198, &curve).is_ok());
        assert_eq!(Nonce::new(0, &curve), Err(Error::Validation));
        assert!(Nonce::new(1, &curve).is_ok());
    }

    #[test]
    fn from_decimal() {
        let curve = toy_curve();
        let key = SecretKey::from_decimal(" 7\n", &curve).unwrap();
        assert_eq!(key.secret_scalar(), &BigInt::from(7));
        assert_eq!(key.public_key(&curve), AffinePoint::new(66, 11));
        assert_eq!(SecretKey::from_decimal("seven", &curve), Err(Error::Parse));
        assert_eq!(SecretKey::from_decimal("", &curve), Err(Error::Parse));
    }

    #[test]
    fn debug_redacts_scalar() {
        let curve = toy_curve();
        let key = SecretKey::new(123, &curve).unwrap();
        let nonce = Nonce::new(77, &curve).unwrap();
        assert!(!format!("{key:?}").contains("123"));
        assert!(!format!("{nonce:?}").contains("77"));
    }

    #[test]
    fn fixed_nonce_is_single_use() {
        let curve = toy_curve();
        let nonce = Nonce::new(42, &curve).unwrap();
        let mut source = &nonce;
        assert_eq!(source.nonce(&curve, 0), Ok(nonce.clone()));
        assert_eq!(source.nonce(&curve, 1), Err(Error::DegenerateNonce));
    }

    #[test]
    fn random_scalars_in_range() {
        let curve = toy_curve();
        let mut rng = OsRng.unwrap_err();
        let mut source = RandomNonce(OsRng.unwrap_err());

        for attempt in 0..256 {
            let key = SecretKey::random(&curve, &mut rng);
            assert!(curve.is_valid_scalar(key.secret_scalar()));

            let nonce = source.nonce(&curve, attempt).unwrap();
            assert!(curve.is_valid_scalar(nonce.secret_scalar()));
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn generate_in_range() {
        let curve = crate::secp256k1::curve();
        let nonce = Nonce::generate(&curve).unwrap();
        assert!(curve.is_valid_scalar(nonce.secret_scalar()));
    }
}
