//! Weierstrass cubics `y² = x³ + ax² + bx + c` over prime fields.

use crate::{
    AffinePoint, Error, Result,
    field::{mod_inverse, reduce},
};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Elliptic curve `y² = x³ + ax² + bx + c` over `𝔽ₚ` together with a
/// distinguished base point `G` generating a subgroup of prime order `n`.
///
/// Immutable once constructed. All point arithmetic is affine and exact.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    c: BigInt,
    p: BigInt,
    generator: AffinePoint,
    order: BigInt,
}

impl Curve {
    /// Create a new curve from its equation coefficients, field modulus,
    /// base point and base point order.
    ///
    /// Coefficients are reduced modulo `p`. Fails with [`Error::Validation`]
    /// if `p ≤ 1`, `n ≤ 1`, or the generator is the identity or not on the
    /// curve.
    pub fn new(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        c: impl Into<BigInt>,
        p: impl Into<BigInt>,
        generator: AffinePoint,
        order: impl Into<BigInt>,
    ) -> Result<Self> {
        let p = p.into();
        let order = order.into();

        if p <= BigInt::one() || order <= BigInt::one() {
            return Err(Error::Validation);
        }

        let curve = Self {
            a: reduce(&a.into(), &p),
            b: reduce(&b.into(), &p),
            c: reduce(&c.into(), &p),
            p,
            generator,
            order,
        };

        if curve.generator.is_identity() || !curve.contains(&curve.generator) {
            return Err(Error::Validation);
        }

        Ok(curve)
    }

    /// Create a curve from parameters already known to be valid and reduced.
    pub(crate) fn new_unchecked(
        [a, b, c, p]: [BigInt; 4],
        generator: AffinePoint,
        order: BigInt,
    ) -> Self {
        debug_assert!(!generator.is_identity());

        Self {
            a,
            b,
            c,
            p,
            generator,
            order,
        }
    }

    /// Coefficient `a` (of `x²`).
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b` (of `x`).
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Constant term `c`.
    pub fn c(&self) -> &BigInt {
        &self.c
    }

    /// Field modulus `p`.
    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    /// Base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigInt {
        &self.order
    }

    /// Does `point` satisfy the curve equation?
    ///
    /// The point at infinity is always on the curve.
    pub fn contains(&self, point: &AffinePoint) -> bool {
        match point {
            AffinePoint::Identity => true,
            AffinePoint::Affine { x, y } => {
                let lhs = y * y;
                let rhs = x * x * x + &self.a * x * x + &self.b * x + &self.c;
                reduce(&(lhs - rhs), &self.p).is_zero()
            }
        }
    }

    /// Compute `-point`.
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        match point {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Affine { x, y } => AffinePoint::Affine {
                x: x.clone(),
                y: reduce(&-y, &self.p),
            },
        }
    }

    /// Compute `lhs + rhs` using the chord-and-tangent law.
    ///
    /// The slope denominators `x₂ - x₁` and `2y` are nonzero on every path
    /// which inverts them, so the modular inverses cannot fail for a prime
    /// `p`. A composite modulus which makes one fail yields the identity.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint {
        self.try_add(lhs, rhs).unwrap_or(AffinePoint::Identity)
    }

    /// Compute `point + point`.
    pub fn double(&self, point: &AffinePoint) -> AffinePoint {
        self.add(point, point)
    }

    fn try_add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        let p = &self.p;

        let ((x1, y1), (x2, y2)) = match (lhs, rhs) {
            (AffinePoint::Identity, _) => return Ok(rhs.clone()),
            (_, AffinePoint::Identity) => return Ok(lhs.clone()),
            (AffinePoint::Affine { x: x1, y: y1 }, AffinePoint::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        let x_diff = reduce(&(x2 - x1), p);
        let y_diff = reduce(&(y2 - y1), p);

        let slope = if x_diff.is_zero() {
            if !y_diff.is_zero() {
                // vertical chord: rhs = -lhs
                return Ok(AffinePoint::Identity);
            }

            if reduce(y1, p).is_zero() {
                // 2-torsion point: its own inverse
                return Ok(AffinePoint::Identity);
            }

            let numerator = BigInt::from(3) * x1 * x1 + BigInt::from(2) * &self.a * x1 + &self.b;
            reduce(&(numerator * mod_inverse(&(BigInt::from(2) * y1), p)?), p)
        } else {
            reduce(&(y_diff * mod_inverse(&x_diff, p)?), p)
        };

        let nu = reduce(&(y1 - &slope * x1), p);
        let x3 = reduce(&(&slope * &slope - &self.a - x1 - x2), p);
        let y3 = reduce(&(-(&slope * &x3) - nu), p);

        Ok(AffinePoint::Affine { x: x3, y: y3 })
    }

    /// Compute the order of `point` by repeated addition.
    ///
    /// Runs in time linear in the order, so this is only usable on small
    /// curves.
    pub fn point_order(&self, point: &AffinePoint) -> BigInt {
        let mut acc = point.clone();
        let mut order = BigInt::one();

        while !acc.is_identity() {
            acc = self.add(point, &acc);
            order += 1u32;
        }

        order
    }

    /// Is `scalar` in the range `[1, n)`?
    pub(crate) fn is_valid_scalar(&self, scalar: &BigInt) -> bool {
        scalar.is_positive() && scalar < &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::Curve;
    use crate::{AffinePoint, Error};
    use num_bigint::BigInt;

    /// `y² = x³ + 7` over `𝔽₂₁₁`, 199 points plus the identity.
    fn toy_curve() -> Curve {
        Curve::new(0, 0, 7, 211, AffinePoint::new(3, 33), 199).unwrap()
    }

    #[test]
    fn rejects_generator_off_curve() {
        assert_eq!(
            Curve::new(0, 0, 7, 211, AffinePoint::new(3, 34), 199),
            Err(Error::Validation)
        );
        assert_eq!(
            Curve::new(0, 0, 7, 211, AffinePoint::Identity, 199),
            Err(Error::Validation)
        );
    }

    #[test]
    fn rejects_degenerate_moduli() {
        assert!(Curve::new(0, 0, 7, 1, AffinePoint::new(0, 0), 199).is_err());
        assert!(Curve::new(0, 0, 7, 211, AffinePoint::new(3, 33), 1).is_err());
    }

    #[test]
    fn reduces_coefficients() {
        let curve = Curve::new(-211, 211, 7 + 211, 211, AffinePoint::new(3, 33), 199).unwrap();
        assert_eq!(curve, toy_curve());
    }

    #[test]
    fn contains() {
        let curve = toy_curve();
        assert!(curve.contains(&AffinePoint::Identity));
        assert!(curve.contains(&AffinePoint::new(3, 33)));
        assert!(curve.contains(&AffinePoint::new(3, 178)));
        assert!(!curve.contains(&AffinePoint::new(3, 34)));
    }

    #[test]
    fn negate() {
        let curve = toy_curve();
        assert_eq!(curve.negate(&AffinePoint::Identity), AffinePoint::Identity);
        assert_eq!(
            curve.negate(&AffinePoint::new(3, 33)),
            AffinePoint::new(3, 178)
        );
    }

    #[test]
    fn identity_laws() {
        let curve = toy_curve();
        let g = curve.generator();
        assert_eq!(&curve.add(g, &AffinePoint::Identity), g);
        assert_eq!(&curve.add(&AffinePoint::Identity, g), g);
        assert_eq!(
            curve.add(&AffinePoint::Identity, &AffinePoint::Identity),
            AffinePoint::Identity
        );
    }

    #[test]
    fn vertical_chord() {
        let curve = toy_curve();
        assert_eq!(
            curve.add(&AffinePoint::new(3, 33), &AffinePoint::new(3, 178)),
            AffinePoint::Identity
        );
    }

    #[test]
    fn double_two_torsion_point() {
        // `y² = x³ + 7` over `𝔽₁₀₁` has the 2-torsion point (93, 0)
        let curve = Curve::new(0, 0, 7, 101, AffinePoint::new(93, 0), 2).unwrap();
        let point = AffinePoint::new(93, 0);
        assert_eq!(curve.double(&point), AffinePoint::Identity);
        assert_eq!(curve.point_order(&point), BigInt::from(2));
    }

    #[test]
    fn double_with_quadratic_term() {
        // `y² = x³ + 2x² + 3x + 5` over `𝔽₈₃`
        let curve = Curve::new(2, 3, 5, 83, AffinePoint::new(1, 29), 89).unwrap();
        let g = curve.generator();
        let g2 = curve.double(g);
        assert_eq!(g2, AffinePoint::new(36, 68));
        assert_eq!(curve.add(&g2, g), AffinePoint::new(80, 30));
        assert!(curve.contains(&g2));
    }

    #[test]
    fn point_order() {
        let curve = toy_curve();
        assert_eq!(curve.point_order(curve.generator()), BigInt::from(199));
        assert_eq!(curve.point_order(&AffinePoint::Identity), BigInt::from(1));
    }
}
