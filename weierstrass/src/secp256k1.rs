//! secp256k1 elliptic curve.
//!
//! Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain
//! Parameters:
//!
//! <https://www.secg.org/sec2-v2.pdf>
//!
//! The curve's equation is `y² = x³ + 7` over the ~256-bit prime field
//! `p = 2²⁵⁶ − 2³² − 2⁹ − 2⁸ − 2⁷ − 2⁶ − 2⁴ − 1`.

use crate::{AffinePoint, Curve};
use hex_literal::hex;
use num_bigint::{BigInt, Sign};

#[cfg(feature = "critical-section")]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::LazyLock;

/// Field modulus `p`, big endian.
pub const MODULUS: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// Order `n` of the base point, big endian.
pub const ORDER: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// Base point x-coordinate, big endian.
pub const GENERATOR_X: [u8; 32] =
    hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

/// Base point y-coordinate, big endian.
pub const GENERATOR_Y: [u8; 32] =
    hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

/// Lazily constructed secp256k1 curve shared by the whole process.
#[cfg(any(feature = "critical-section", feature = "std"))]
pub static SECP256K1: LazyLock<Curve> = LazyLock::new(curve);

/// Construct the secp256k1 curve parameters.
pub fn curve() -> Curve {
    let uint = |bytes: &[u8; 32]| BigInt::from_bytes_be(Sign::Plus, bytes);

    Curve::new_unchecked(
        [
            BigInt::from(0),
            BigInt::from(0),
            BigInt::from(7),
            uint(&MODULUS),
        ],
        AffinePoint::new(uint(&GENERATOR_X), uint(&GENERATOR_Y)),
        uint(&ORDER),
    )
}
