//! Message hashing.

use num_bigint::{BigInt, BigUint};
use sha2::{Digest, Sha256};

/// Hash `message` with SHA-256 and truncate the digest to an integer of at
/// most `bitlength(n) − 1` bits.
///
/// See [`hash_and_truncate_with`].
pub fn hash_and_truncate(message: &str, n: &BigInt) -> BigInt {
    hash_and_truncate_with::<Sha256>(message, n)
}

/// Hash the UTF-8 encoding of `message` with `D` and truncate the digest to an
/// integer `z ∈ [0, 2^(bitlength(n) − 1))`.
///
/// The digest is read as a big-endian unsigned integer `h` and `z` keeps the
/// leading `bitlength(n) − 1` bits of `h`'s binary representation (leading zero
/// bits of the digest do not count). This is truncation, not reduction
/// modulo `n`: if `h` is already short enough it is returned unchanged.
pub fn hash_and_truncate_with<D: Digest>(message: &str, n: &BigInt) -> BigInt {
    let h = BigUint::from_bytes_be(&D::digest(message.as_bytes()));
    let keep = n.magnitude().bits().saturating_sub(1);
    let shift = h.bits().saturating_sub(keep);

    BigInt::from(h >> shift)
}
