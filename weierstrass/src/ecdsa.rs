//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! # ⚠️ Warning: Hazmat!
//!
//! [`sign`] uses whatever nonce it is given. Signing two different messages
//! with the same nonce reveals the secret key to anyone holding both
//! signatures; [`nonce_reuse`] implements exactly that recovery.

pub mod nonce_reuse;

mod sign;
mod verify;

pub use self::{
    sign::sign,
    verify::{try_verify, verify},
};

use crate::Result;
use core::{fmt, str::FromStr};
use num_bigint::BigInt;

/// ECDSA signature `(r, s)`.
///
/// Signatures produced by [`sign`] have `r, s ∈ [1, n)`. Signatures received
/// from a request are stored as given, sign and all, and range-checked by
/// [`verify`].
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Signature {
    r: BigInt,
    s: BigInt,
}

impl Signature {
    /// Create a signature from its scalar components.
    pub fn new(r: impl Into<BigInt>, s: impl Into<BigInt>) -> Self {
        Self {
            r: r.into(),
            s: s.into(),
        }
    }

    /// Parse a signature from base-10 components.
    ///
    /// Surrounding whitespace and a leading sign are accepted.
    pub fn from_decimal(r: &str, s: &str) -> Result<Self> {
        Ok(Self {
            r: BigInt::from_str(r.trim())?,
            s: BigInt::from_str(s.trim())?,
        })
    }

    /// Parse the `r` and `s` request parameters.
    ///
    /// If either component is missing or malformed the whole signature
    /// becomes `(0, 0)`, which never verifies.
    pub fn from_decimal_or_zero(r: Option<&str>, s: Option<&str>) -> Self {
        match (r, s) {
            (Some(r), Some(s)) => Self::from_decimal(r, s).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Get the `r` component of this signature
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// Get the `s` component of this signature
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// Split this signature into its `(r, s)` components.
    pub fn split(self) -> (BigInt, BigInt) {
        (self.r, self.s)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r={}, s={})", self.r, self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;
    use crate::Error;
    use alloc::string::ToString;
    use num_bigint::BigInt;

    #[test]
    fn from_decimal() {
        let sig = Signature::from_decimal(" 51", "29\n").unwrap();
        assert_eq!(sig, Signature::new(51, 29));
        assert_eq!(
            Signature::from_decimal("-5", "+7").unwrap(),
            Signature::new(-5, 7)
        );
        assert_eq!(Signature::from_decimal("0x33", "29"), Err(Error::Parse));
    }

    #[test]
    fn malformed_request_maps_to_zero() {
        assert_eq!(
            Signature::from_decimal_or_zero(Some("51"), Some("abc")),
            Signature::new(0, 0)
        );
        assert_eq!(
            Signature::from_decimal_or_zero(Some(""), Some("29")),
            Signature::new(0, 0)
        );
    }

    #[test]
    fn missing_component_maps_to_zero() {
        let sig = Signature::from_decimal_or_zero(None, Some("29"));
        assert_eq!(sig, Signature::new(0, 0));
        assert_eq!(sig.r(), &BigInt::from(0));
        assert_eq!(sig.s(), &BigInt::from(0));
        assert_eq!(
            Signature::from_decimal_or_zero(Some("51"), None),
            Signature::new(0, 0)
        );
        assert_eq!(Signature::from_decimal_or_zero(None, None), Signature::default());
    }

    #[test]
    fn display() {
        assert_eq!(Signature::new(51, 29).to_string(), "(r=51, s=29)");
    }
}
