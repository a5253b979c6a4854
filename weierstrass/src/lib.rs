//! Pure Rust arithmetic on elliptic curves `y² = x³ + ax² + bx + c` over
//! prime fields, with ECDSA signing and verification built on it.
//!
//! Points are kept in affine coordinates and all arithmetic is exact
//! arbitrary-precision integer arithmetic, so the same code runs unchanged on
//! secp256k1 and on toy curves small enough to enumerate by hand.
//!
//! # ⚠️ Security Warning
//!
//! Nothing here is constant time, and [`issuance`] deliberately signs every
//! artifact with one shared nonce. Anyone holding two of its signatures can
//! recover the secret key with [`ecdsa::nonce_reuse`].
//!
//! # Usage
//!
//! ```
//! use weierstrass::{AffinePoint, Curve, Nonce, SecretKey, ecdsa};
//!
//! // y² = x³ + 7 over 𝔽₂₁₁, base point of order 199
//! let curve = Curve::new(0, 0, 7, 211, AffinePoint::new(3, 33), 199)?;
//! let secret_key = SecretKey::new(7, &curve)?;
//! let public_key = secret_key.public_key(&curve);
//! let nonce = Nonce::new(42, &curve)?;
//!
//! let (public_key, signature) = ecdsa::sign("alice.txt", &curve, &nonce, &secret_key, &public_key)?;
//! assert!(ecdsa::verify("alice.txt", &curve, &public_key, &signature));
//! assert!(!ecdsa::verify("bob.txt", &curve, &public_key, &signature));
//! # Ok::<(), weierstrass::Error>(())
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ecdsa;
pub mod field;
pub mod hash;
pub mod secp256k1;

#[cfg(feature = "std")]
pub mod issuance;

mod affine;
mod curve;
mod error;
mod mul;
mod secret_key;

pub use crate::{
    affine::AffinePoint,
    curve::Curve,
    error::{Error, Result},
    secret_key::{Nonce, NonceSource, RandomNonce, SecretKey},
};
pub use num_bigint::{self, BigInt};
