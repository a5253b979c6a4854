//! Error type

use core::fmt::{self, Display};

/// Result type with the `weierstrass` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Elliptic curve and ECDSA errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Value has no multiplicative inverse under the given modulus.
    Arithmetic,

    /// Value outside its accepted range, or a point which is not on the curve
    /// or fails its order check, or a signature which does not verify.
    Validation,

    /// Malformed decimal integer.
    Parse,

    /// A fixed nonce produced `r = 0` or `s = 0` and no other nonce is
    /// available to retry with.
    DegenerateNonce,

    /// The operating system's random number generator failed.
    #[cfg(feature = "std")]
    Rng,

    /// Reading the secret key or enumerating the artifact directory failed.
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Arithmetic => f.write_str("value is not invertible modulo the given modulus"),
            Error::Validation => f.write_str("value failed validation"),
            Error::Parse => f.write_str("malformed decimal integer"),
            Error::DegenerateNonce => f.write_str("nonce yields a degenerate signature"),
            #[cfg(feature = "std")]
            Error::Rng => f.write_str("OS random number generator failure"),
            #[cfg(feature = "std")]
            Error::Io(kind) => write!(f, "I/O error: {kind}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err.kind())
    }
}

impl From<num_bigint::ParseBigIntError> for Error {
    fn from(_: num_bigint::ParseBigIntError) -> Error {
        Error::Parse
    }
}
