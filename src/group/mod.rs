//! Finite group of the points of an elliptic curve over Fp.
//!
//! The curve is the set of (x, y) solutions to a short Weierstrass
//! equation y^2 = x^3 + a*x + b with x, y, a, b in Fp (p an odd prime)
//! and 4a^3 + 27b^2 != 0 mod p, together with a point at infinity. The
//! group is defined by the point addition law.
//!
//! A `CurveGroup` does not have to be a cyclic subgroup; for the cyclic
//! subgroup of prime order with its generator see the `curve` module.

pub mod affine_coords;
pub mod jacobian_coords;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

use crate::encoding::int_string;
use crate::errors::{CurveError, Result};
use crate::numbertheory::{fermat_test, legendre_symbol, mod_sqrt};

/// Affine curve point.
///
/// The point at infinity is encoded as (0, 0): y = 0 never occurs for a
/// finite point on the non-singular curves of interest (it would make x
/// a rational root of x^3 + ax + b), so the zero y doubles as the
/// infinity marker.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigUint,
    pub y: BigUint,
}

impl Point {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point { x, y }
    }

    /// The point at infinity, (0, 0) in affine coordinates.
    pub fn infinity() -> Self {
        Point {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.y.is_zero()
    }
}

/// Jacobian projective point: (X, Y, Z) stands for the affine point
/// (X/Z^2, Y/Z^3). Any triple with Z = 0 is infinity; (0, 0, 0) is the
/// canonical one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JacPoint {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
}

impl JacPoint {
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        JacPoint { x, y, z }
    }

    /// The canonical point at infinity, (0, 0, 0).
    pub fn infinity() -> Self {
        JacPoint {
            x: BigUint::zero(),
            y: BigUint::zero(),
            z: BigUint::zero(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }
}

/// Elliptic curve group parameters, immutable once validated.
///
/// Hash and Eq are derived so a group can key the precomputation caches
/// by its (p, a, b) value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurveGroup {
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    /// byte length of p
    pub psize: usize,
    /// whether the quadratic-residue symmetry breaker is available
    pub p_is_three_mod_four: bool,
}

impl CurveGroup {
    /// Build a curve group, checking the parameters according to
    /// SEC 1 v.2 3.1.1.2.1.
    ///
    /// ### Arguments
    ///
    /// * `p` - Field prime
    /// * `a` - First curve coefficient, in [0, p)
    /// * `b` - Second curve coefficient, in [0, p)
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Result<Self> {
        // 1. p must be prime; the base-2 Fermat test will do as a
        // probabilistic check
        if !fermat_test(&p) {
            return Err(CurveError::InvalidParameter(format!(
                "p is not prime: {}",
                int_string(&p)
            )));
        }

        let psize = ((p.bits() + 7) / 8) as usize;
        let p_is_three_mod_four = &p % 4u32 == BigUint::from(3u32);

        // 2. a and b must lie in [0, p-1]; negative values are already
        // unrepresentable
        if a >= p {
            return Err(CurveError::InvalidParameter(format!(
                "p <= a: {} <= {}",
                int_string(&p),
                int_string(&a)
            )));
        }
        if b >= p {
            return Err(CurveError::InvalidParameter(format!(
                "p <= b: {} <= {}",
                int_string(&p),
                int_string(&b)
            )));
        }

        // 3. 4a^3 + 27b^2 != 0 (mod p)
        let d = 4u32 * &a * &a * &a + 27u32 * &b * &b;
        if (d % &p).is_zero() {
            return Err(CurveError::InvalidParameter(
                "zero discriminant".to_string(),
            ));
        }

        Ok(CurveGroup {
            p,
            a,
            b,
            psize,
            p_is_three_mod_four,
        })
    }

    /// Reduce a signed intermediate into [0, p).
    pub(crate) fn modp(&self, x: &BigInt) -> BigUint {
        let p = BigInt::from(self.p.clone());
        x.mod_floor(&p).to_biguint().unwrap()
    }

    /// Return the opposite point. The input is not checked to be on the
    /// curve; the reduction keeps negate(INF) = INF.
    pub fn negate(&self, q: &Point) -> Point {
        Point::new(q.x.clone(), (&self.p - &q.y % &self.p) % &self.p)
    }

    /// Return the opposite Jacobian point. The input is not checked to
    /// be on the curve.
    pub fn negate_jac(&self, q: &JacPoint) -> JacPoint {
        JacPoint::new(
            q.x.clone(),
            (&self.p - &q.y % &self.p) % &self.p,
            q.z.clone(),
        )
    }

    /// Return the sum of two points. The input points must be on the
    /// curve.
    pub fn add(&self, q1: &Point, q2: &Point) -> Result<Point> {
        self.require_on_curve(q1)?;
        self.require_on_curve(q2)?;
        // stay affine: a Jacobian round trip would cost two inversions
        // against the single one of the affine formula
        self.add_aff(q1, q2)
    }

    /// Right-hand side of the curve equation, x^3 + ax + b mod p.
    fn y2(&self, x: &BigUint) -> BigUint {
        ((x * x + &self.a) * x + &self.b) % &self.p
    }

    /// Return whether the point satisfies the curve equation. The
    /// (x, 0) infinity encoding is accepted and answers true;
    /// out-of-range coordinates are structural errors.
    pub fn is_on_curve(&self, q: &Point) -> Result<bool> {
        if q.x >= self.p {
            return Err(CurveError::OutOfRange(format!(
                "x-coordinate not in 0..p-1: {}",
                int_string(&q.x)
            )));
        }
        if q.y.is_zero() {
            // infinity point in affine coordinates
            return Ok(true);
        }
        if q.y >= self.p {
            return Err(CurveError::OutOfRange(format!(
                "y-coordinate not in 1..p-1: {}",
                int_string(&q.y)
            )));
        }

        Ok(self.y2(&q.x) == (&q.y * &q.y) % &self.p)
    }

    /// Require the input point to be on the curve.
    pub fn require_on_curve(&self, q: &Point) -> Result<()> {
        if !self.is_on_curve(q)? {
            return Err(CurveError::NotOnCurve("point not on curve".to_string()));
        }
        Ok(())
    }

    /// Return one root y of y^2 = x^3 + ax + b; which of the two is
    /// unspecified. Fails when x is out of range or has no root.
    pub fn y(&self, x: &BigUint) -> Result<BigUint> {
        if x >= &self.p {
            return Err(CurveError::OutOfRange(format!(
                "x-coordinate not in 0..p-1: {}",
                int_string(x)
            )));
        }

        let y2 = self.y2(x);
        mod_sqrt(&y2, &self.p).map_err(|_| {
            CurveError::NoSquareRoot(format!("invalid x-coordinate: {}", int_string(x)))
        })
    }

    /// Return the root whose parity matches `odd`. The two roots sum to
    /// p, which is odd, so exactly one of them qualifies.
    pub fn y_odd(&self, x: &BigUint, odd: bool) -> Result<BigUint> {
        let root = self.y(x)?;
        if root.is_odd() == odd {
            Ok(root)
        } else {
            Ok(&self.p - root)
        }
    }

    /// Return the smaller of the two roots when `low`, else the larger.
    /// floor(p / 2) counts as low.
    pub fn y_low(&self, x: &BigUint, low: bool) -> Result<BigUint> {
        let root = self.y(x)?;
        let is_low = root <= (&self.p >> 1u32);
        if is_low == low {
            Ok(root)
        } else {
            Ok(&self.p - root)
        }
    }

    /// Return the root which is (`quad_res`) or is not a quadratic
    /// residue. Only available for p = 3 mod 4, where -1 is a
    /// non-residue and therefore exactly one root qualifies.
    pub fn y_quadratic_residue(&self, x: &BigUint, quad_res: bool) -> Result<BigUint> {
        self.require_p_three_mod_four()?;
        let root = self.y(x)?;
        let is_residue = legendre_symbol(&root, &self.p) == 1;
        if is_residue == quad_res {
            Ok(root)
        } else {
            Ok(&self.p - root)
        }
    }

    /// Require the field prime to be equal to 3 mod 4.
    pub fn require_p_three_mod_four(&self) -> Result<()> {
        if !self.p_is_three_mod_four {
            return Err(CurveError::WrongPrimeForm(int_string(&self.p)));
        }
        Ok(())
    }

    /// Whether the affine y-coordinate is a quadratic residue. The
    /// input is not checked to be on the curve; infinity answers false.
    pub fn has_square_y(&self, q: &Point) -> bool {
        legendre_symbol(&q.y, &self.p) == 1
    }

    /// Jacobian variant of `has_square_y`: Y/Z^3 differs from Y*Z by the
    /// square factor Z^4, so the product carries the same residuacity.
    pub fn has_square_y_jac(&self, q: &JacPoint) -> bool {
        legendre_symbol(&(&q.y * &q.z % &self.p), &self.p) == 1
    }
}

/*---- TESTS ----*/
