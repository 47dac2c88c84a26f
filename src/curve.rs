//! Cyclic subgroup of prime order over a curve group, and the public
//! scalar-multiplication API.
//!
//! A `Curve` extends a `CurveGroup` with a distinguished generator G of
//! prime order n and a cofactor h; construction validates the subgroup
//! parameters against the Hasse bound. The free functions `mult`,
//! `double_mult` and `multi_mult` take signed scalars and reduce them
//! mod n before dispatching to the Jacobian algorithms, so negative
//! coefficients wrap to the complementary multiple.

use std::ops::Deref;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::warn;

use crate::encoding::int_string;
use crate::errors::{CurveError, Result};
use crate::group::jacobian_coords::jac_from_aff;
use crate::group::{CurveGroup, JacPoint, Point};
use crate::mult::bos_coster::multi_mult_jac;
use crate::mult::mult_jac;
use crate::mult::shamir_strauss::double_mult_jac;
use crate::numbertheory::fermat_test;

/// Prime-order cyclic subgroup with its distinguished generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    pub group: CurveGroup,
    /// subgroup generator
    pub g: Point,
    /// generator in Jacobian coordinates, kept for the hot paths
    pub gj: JacPoint,
    /// prime order of the subgroup
    pub n: BigUint,
    /// byte length of n
    pub nsize: usize,
    /// cofactor #E / n
    pub h: u32,
}

impl Deref for Curve {
    type Target = CurveGroup;

    fn deref(&self) -> &CurveGroup {
        &self.group
    }
}

impl Curve {
    /// Build and validate a prime-order subgroup.
    ///
    /// Beyond the `CurveGroup` checks this verifies that G is a finite
    /// curve point, that n is prime and sits where the Hasse theorem
    /// puts the group cardinality, that the cofactor matches and that
    /// n G = INF. With `weakness_check`, curves with cofactor above 1
    /// are rejected outright.
    ///
    /// ### Arguments
    ///
    /// * `p` - Field prime
    /// * `a` - First curve coefficient
    /// * `b` - Second curve coefficient
    /// * `g` - Subgroup generator
    /// * `n` - Subgroup order
    /// * `h` - Cofactor
    /// * `weakness_check` - Reject weak parameter sets
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        g: Point,
        n: BigUint,
        h: u32,
        weakness_check: bool,
    ) -> Result<Self> {
        let group = CurveGroup::new(p, a, b)?;

        // 4. the generator must be a finite point of the curve
        if g.is_infinity() {
            return Err(CurveError::InvalidParameter(
                "INF point cannot be a generator".to_string(),
            ));
        }
        if !group.is_on_curve(&g)? {
            return Err(CurveError::NotOnCurve(
                "Generator is not on the curve".to_string(),
            ));
        }

        // 5. the subgroup order must be prime too
        if !fermat_test(&n) {
            return Err(CurveError::InvalidParameter(format!(
                "n is not prime: {}",
                int_string(&n)
            )));
        }

        // Hasse theorem: |#E - (p + 1)| <= delta with delta = 2 sqrt(p)
        let delta = (4u32 * &group.p).sqrt();
        let upper = &group.p + 1u32 + &delta;
        if h < 2 {
            let lower = &group.p + 1u32 - &delta;
            if n < lower || n > upper {
                return Err(CurveError::InvalidParameter(format!(
                    "n not in (p + 1 - delta, p + 1 + delta): {}",
                    int_string(&n)
                )));
            }
        }

        // 6. the cofactor implied by the Hasse interval must match
        let mut exp_h = &upper / &n;
        if exp_h.is_zero() {
            exp_h = BigUint::one();
        }
        if exp_h != BigUint::from(h) {
            return Err(CurveError::InvalidParameter(format!("invalid h: {}", h)));
        }

        // 7. G must generate a subgroup of order exactly n
        let gj = jac_from_aff(&g);
        if !mult_jac(&n, &gj, &group)?.is_infinity() {
            return Err(CurveError::InvalidParameter(format!(
                "n is not the group order: {}",
                int_string(&n)
            )));
        }

        // a cofactor above 1 leaves room for small-subgroup tricks
        if weakness_check && h > 1 {
            warn!(h, "weak curve");
            return Err(CurveError::InvalidParameter("weak curve".to_string()));
        }

        let nsize = ((n.bits() + 7) / 8) as usize;

        Ok(Curve {
            group,
            g,
            gj,
            n,
            nsize,
            h,
        })
    }

    /// Reduce a signed scalar into [0, n).
    fn scalar_mod_n(&self, m: &BigInt) -> BigUint {
        let n = BigInt::from(self.n.clone());
        m.mod_floor(&n).to_biguint().unwrap()
    }
}

/// Scalar multiplication m * Q with the default algorithm. The point
/// must be on the curve; the scalar is reduced mod n first.
pub fn mult(m: &BigInt, q: &Point, ec: &Curve) -> Result<Point> {
    ec.require_on_curve(q)?;
    let m = ec.scalar_mod_n(m);
    let r = mult_jac(&m, &jac_from_aff(q), &ec.group)?;
    ec.aff_from_jac(&r)
}

/// Double scalar multiplication u*H + v*Q through the Shamir-Strauss
/// joint loop. The points must be on the curve; both scalars are
/// reduced mod n first.
pub fn double_mult(u: &BigInt, h: &Point, v: &BigInt, q: &Point, ec: &Curve) -> Result<Point> {
    ec.require_on_curve(h)?;
    ec.require_on_curve(q)?;
    let u = ec.scalar_mod_n(u);
    let v = ec.scalar_mod_n(v);
    let r = double_mult_jac(&u, &jac_from_aff(h), &v, &jac_from_aff(q), &ec.group)?;
    ec.aff_from_jac(&r)
}

/// Multi scalar multiplication sum_i scalar_i * point_i through
/// Bos-Coster. Lengths must match; every point must be on the curve;
/// every scalar is reduced mod n first.
pub fn multi_mult(scalars: &[BigInt], points: &[Point], ec: &Curve) -> Result<Point> {
    if scalars.len() != points.len() {
        return Err(CurveError::InvalidInput(format!(
            "mismatch between number of scalars and points: {} vs {}",
            scalars.len(),
            points.len()
        )));
    }

    let mut ns = Vec::with_capacity(scalars.len());
    let mut jpoints = Vec::with_capacity(points.len());
    for (m, q) in scalars.iter().zip(points.iter()) {
        ec.require_on_curve(q)?;
        ns.push(ec.scalar_mod_n(m));
        jpoints.push(jac_from_aff(q));
    }

    let r = multi_mult_jac(&ns, &jpoints, &ec.group)?;
    ec.aff_from_jac(&r)
}

/*---- TESTS ----*/
