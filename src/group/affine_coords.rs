//! Affine group-law primitives.
//!
//! Addition and doubling handle infinity, doubling and opposite points
//! as explicit branches, so they are not constant-time. They cost a
//! single modular inversion, which is why the public `add` prefers them
//! over a Jacobian round trip.

use num_bigint::BigInt;

use crate::errors::Result;
use crate::group::{CurveGroup, Point};
use crate::numbertheory::mod_inv;

impl CurveGroup {
    /// Affine addition. The points are assumed to be on the curve.
    pub(crate) fn add_aff(&self, q: &Point, r: &Point) -> Result<Point> {
        if r.is_infinity() {
            return Ok(q.clone());
        }
        if q.is_infinity() {
            return Ok(r.clone());
        }

        if r.x == q.x {
            if r.y == q.y {
                return self.double_aff(r);
            }
            // opposite points
            return Ok(Point::infinity());
        }

        let qx = BigInt::from(q.x.clone());
        let qy = BigInt::from(q.y.clone());
        let rx = BigInt::from(r.x.clone());
        let ry = BigInt::from(r.y.clone());

        let den = self.modp(&(&rx - &qx));
        let lam = BigInt::from(self.modp(&((&ry - &qy) * BigInt::from(mod_inv(&den, &self.p)?))));
        let x = self.modp(&(&lam * &lam - &qx - &rx));
        let y = self.modp(&(&lam * (&qx - BigInt::from(x.clone())) - &qy));

        Ok(Point::new(x, y))
    }

    /// Affine doubling. The point is assumed to be on the curve.
    pub(crate) fn double_aff(&self, q: &Point) -> Result<Point> {
        if q.is_infinity() {
            return Ok(Point::infinity());
        }

        let qx = BigInt::from(q.x.clone());
        let qy = BigInt::from(q.y.clone());
        let a = BigInt::from(self.a.clone());

        let den = self.modp(&(2 * &qy));
        let num = self.modp(&(3 * &qx * &qx + &a));
        let lam = BigInt::from(self.modp(&(BigInt::from(num) * BigInt::from(mod_inv(&den, &self.p)?))));
        let x = self.modp(&(&lam * &lam - 2 * &qx));
        let y = self.modp(&(&lam * (&qx - BigInt::from(x.clone())) - &qy));

        Ok(Point::new(x, y))
    }
}

/*---- TESTS ----*/
