//! Affine curve points.

use core::fmt;
use num_bigint::BigInt;

/// Point on a Weierstrass curve in affine coordinates.
///
/// Equality is structural: the identity only equals itself and two affine
/// points are equal iff their coordinates match exactly. Coordinates are
/// expected in `[0, p)`; [`Curve`](crate::Curve) operations always produce
/// reduced coordinates.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Finite point `(x, y)`.
    Affine {
        /// x-coordinate
        x: BigInt,

        /// y-coordinate
        y: BigInt,
    },
}

impl AffinePoint {
    /// Create a finite point from its coordinates.
    ///
    /// The coordinates are not checked against any curve; use
    /// [`Curve::contains`](crate::Curve::contains) for that.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        AffinePoint::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, AffinePoint::Identity)
    }

    /// Get the x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigInt> {
        match self {
            AffinePoint::Identity => None,
            AffinePoint::Affine { x, .. } => Some(x),
        }
    }

    /// Get the y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigInt> {
        match self {
            AffinePoint::Identity => None,
            AffinePoint::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffinePoint::Identity => f.write_str("Inf"),
            AffinePoint::Affine { x, y } => write!(f, "({x},{y})"),
        }
    }
}
