//! Jacobian-coordinate group primitives and conversions.
//!
//! (X, Y, Z) stands for the affine point (X/Z^2, Y/Z^3): additions and
//! doublings never invert a field element, so the scalar-multiplication
//! loops run here and convert back to affine once at the end.
//!
//! The addition is written straight-line: the incomplete-addition
//! formula is evaluated unconditionally and the result is then picked
//! among four candidates by the two Z-is-zero flags, instead of
//! branching on infinity up front. Doubling remains a branch, taken
//! when both operands are finite with equal affine coordinates.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::errors::{CurveError, Result};
use crate::group::{CurveGroup, JacPoint, Point};
use crate::numbertheory::mod_inv;

/// Jacobian representation of an affine point: Z = 1, except for the
/// (x, 0) infinity marker which maps to Z = 0. Keeping the marker and
/// the Z flag in lockstep is an invariant the whole module relies on.
pub fn jac_from_aff(q: &Point) -> JacPoint {
    let z = if q.y.is_zero() {
        BigUint::zero()
    } else {
        BigUint::one()
    };
    JacPoint::new(q.x.clone(), q.y.clone(), z)
}

impl CurveGroup {
    /// Affine image of a Jacobian point. The point is assumed to be on
    /// the curve; infinity maps back to (0, 0).
    pub fn aff_from_jac(&self, q: &JacPoint) -> Result<Point> {
        if q.is_infinity() {
            return Ok(Point::infinity());
        }

        let z2 = &q.z * &q.z % &self.p;
        let z3 = &z2 * &q.z % &self.p;
        let x = &q.x * mod_inv(&z2, &self.p)? % &self.p;
        let y = &q.y * mod_inv(&z3, &self.p)? % &self.p;

        Ok(Point::new(x, y))
    }

    /// Affine x-coordinate only, saving one inversion over the full
    /// conversion. Infinity has no x-coordinate.
    pub fn x_aff_from_jac(&self, q: &JacPoint) -> Result<BigUint> {
        if q.is_infinity() {
            return Err(CurveError::InvalidInput(
                "infinity point has no x-coordinate".to_string(),
            ));
        }

        let z2 = &q.z * &q.z % &self.p;
        Ok(&q.x * mod_inv(&z2, &self.p)? % &self.p)
    }

    /// Projective equality by cross-multiplication, no inversion:
    /// X_Q Z_R^2 = X_R Z_Q^2 and Y_Q Z_R^3 = Y_R Z_Q^3 (mod p).
    /// The points are assumed to be on the curve.
    pub fn jac_equality(&self, q: &JacPoint, r: &JacPoint) -> bool {
        // the cross products all collapse to zero against an infinity
        // operand, so that case is settled on the Z flags alone
        if q.is_infinity() || r.is_infinity() {
            return q.is_infinity() == r.is_infinity();
        }

        let rz2 = &r.z * &r.z;
        let qz2 = &q.z * &q.z;
        if &q.x * &rz2 % &self.p != &r.x * &qz2 % &self.p {
            return false;
        }

        let rz3 = rz2 * &r.z;
        let qz3 = qz2 * &q.z;
        &q.y * &rz3 % &self.p == &r.y * &qz3 % &self.p
    }

    /// Jacobian addition.
    ///
    /// The incomplete formula runs unconditionally; afterwards the
    /// result is selected among (X, Y, Z), R, Q and infinity by an index
    /// built from the two Z-is-zero flags, since the computed Z
    /// collapses to zero whenever either operand is infinity. The
    /// points are assumed to be on the curve.
    pub fn add_jac(&self, q: &JacPoint, r: &JacPoint) -> JacPoint {
        let rz2 = &r.z * &r.z;
        let rz3 = &rz2 * &r.z;
        let qz2 = &q.z * &q.z;
        let qz3 = &qz2 * &q.z;

        let m = &q.x * &rz2 % &self.p;
        let n = &r.x * &qz2 % &self.p;
        let t = &q.y * &rz3 % &self.p;
        let u = &r.y * &qz3 % &self.p;

        // doubling: equal affine x and y between two finite points. The
        // finiteness guard matters: with the (0, 0, 0) infinity both
        // cross products vanish against an infinity operand and the
        // comparison alone would misfire.
        if !q.is_infinity() && !r.is_infinity() && m == n && t == u {
            return self.double_jac(q);
        }

        let m = BigInt::from(m);
        let n = BigInt::from(n);
        let t = BigInt::from(t);
        let u = BigInt::from(u);

        let w = &u - &t;
        let v = &n - &m;
        let v2 = &v * &v;
        let v3 = &v2 * &v;
        let mv2 = &m * &v2;

        let x = self.modp(&(&w * &w - &v3 - 2 * &mv2));
        let y = self.modp(&(&w * (&mv2 - BigInt::from(x.clone())) - &t * &v3));
        let z = self.modp(&(&v * BigInt::from(q.z.clone()) * BigInt::from(r.z.clone())));

        //      Q==INF  +    R==INF  * 2
        //           0  +         0  * 2 = 0 -> (X, Y, Z)
        //           1  +         0  * 2 = 1 -> R
        //           0  +         1  * 2 = 2 -> Q
        //           1  +         1  * 2 = 3 -> INF
        let candidates = [
            JacPoint::new(x, y, z),
            r.clone(),
            q.clone(),
            JacPoint::infinity(),
        ];
        let i = q.is_infinity() as usize + ((r.is_infinity() as usize) << 1);

        candidates[i].clone()
    }

    /// Jacobian doubling, as a direct formula for callers who know they
    /// need one: W = 3X^2 + aZ^4, V = 4XY^2, X' = W^2 - 2V,
    /// Y' = W(V - X') - 8Y^4, Z' = 2YZ. The point is assumed to be on
    /// the curve.
    pub fn double_jac(&self, q: &JacPoint) -> JacPoint {
        let x = BigInt::from(q.x.clone());
        let y = BigInt::from(q.y.clone());
        let z = BigInt::from(q.z.clone());
        let a = BigInt::from(self.a.clone());

        let z2 = &z * &z;
        let y2 = &y * &y;
        let w = 3 * &x * &x + &a * &z2 * &z2;
        let v = 4 * &x * &y2;
        let xr = &w * &w - 2 * &v;
        let yr = &w * (&v - &xr) - 8 * &y2 * &y2;
        let zr = 2 * &y * &z;

        JacPoint::new(self.modp(&xr), self.modp(&yr), self.modp(&zr))
    }
}

/*---- TESTS ----*/
