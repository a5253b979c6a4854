//! Scalar multiplication.

use crate::{AffinePoint, Curve};
use num_bigint::{BigInt, Sign};

impl Curve {
    /// Compute `k·point` with left-to-right double-and-add over the bits of
    /// `|k|`.
    ///
    /// `0·P` and `k·∞` are the identity; negative `k` multiplies `-P` by `-k`.
    /// Runs in `O(log |k|)` group operations.
    pub fn mul(&self, point: &AffinePoint, k: &BigInt) -> AffinePoint {
        if point.is_identity() {
            return AffinePoint::Identity;
        }

        let base = match k.sign() {
            Sign::NoSign => return AffinePoint::Identity,
            Sign::Minus => self.negate(point),
            Sign::Plus => point.clone(),
        };

        let k = k.magnitude();
        let mut acc = AffinePoint::Identity;

        for i in (0..k.bits()).rev() {
            acc = self.double(&acc);

            if k.bit(i) {
                acc = self.add(&acc, &base);
            }
        }

        acc
    }

    /// Compute `k·G` for the curve's base point `G`.
    pub fn mul_base(&self, k: &BigInt) -> AffinePoint {
        self.mul(self.generator(), k)
    }
}
