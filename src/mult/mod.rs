//! Single-scalar multiplication over a curve group.
//!
//! Five interchangeable algorithms share the contract (m, Q, ec) -> R,
//! selected through `MultAlgorithm`; the crate default is the fixed
//! window with w = 4. The binary and ladder variants commit their
//! conditional results by indexing rather than branching on scalar
//! bits, so the per-bit work does not depend on the bit value. That
//! structure is not a full constant-time claim: the infinity and
//! point-equality branches inside the group primitives remain.
//!
//! Scalars are `BigUint`, so nonnegativity holds by construction; the
//! public API in the `curve` module reduces signed scalars mod n before
//! dispatching here.

pub mod bos_coster;
pub mod shamir_strauss;
pub mod tables;

use std::sync::Arc;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::encoding::to_base;
use crate::errors::{CurveError, Result};
use crate::group::{CurveGroup, JacPoint, Point};
use crate::mult::tables::{cached_multiples, cached_multiples_fixwind, multiples, MAX_W};

/// Window width of the default algorithm
const DEFAULT_WINDOW: usize = 4;

/// Widest window any algorithm accepts; beyond this the table memory is
/// unreasonable and the shift arithmetic would overflow
const WIDEST_WINDOW: usize = 16;

/// Scalar-multiplication algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultAlgorithm {
    /// Right-to-left binary double-and-add
    DoubleAndAdd,
    /// Left-to-right Montgomery ladder
    MontgomeryLadder,
    /// Left-to-right ternary triple-and-add
    TripleAndAdd,
    /// Left-to-right fixed window of the given width
    FixedWindow(usize),
    /// Fixed window over per-window cached tables, additions only
    FixedWindowCached(usize),
}

impl Default for MultAlgorithm {
    fn default() -> Self {
        MultAlgorithm::FixedWindow(DEFAULT_WINDOW)
    }
}

/// Scalar multiplication R = m * Q with the default algorithm.
pub fn mult_jac(m: &BigUint, q: &JacPoint, ec: &CurveGroup) -> Result<JacPoint> {
    mult_jac_with(MultAlgorithm::default(), m, q, ec)
}

/// Dispatch a scalar multiplication to the selected algorithm.
pub fn mult_jac_with(
    algorithm: MultAlgorithm,
    m: &BigUint,
    q: &JacPoint,
    ec: &CurveGroup,
) -> Result<JacPoint> {
    match algorithm {
        MultAlgorithm::DoubleAndAdd => mult_binary(m, q, ec),
        MultAlgorithm::MontgomeryLadder => mult_mont_ladder(m, q, ec),
        MultAlgorithm::TripleAndAdd => mult_base_3(m, q, ec),
        MultAlgorithm::FixedWindow(w) => mult_fixed_window(m, q, ec, w, false),
        MultAlgorithm::FixedWindowCached(w) => mult_fixed_window_cached(m, q, ec, w),
    }
}

/// Double-and-add in affine coordinates, right-to-left binary
/// decomposition. The addition runs at every step and is committed by
/// indexing on the current bit.
///
/// ### Arguments
///
/// * `m` - Scalar coefficient, assumed reduced mod n where appropriate
/// * `q` - Base point, assumed on curve
/// * `ec` - Curve group to operate from
pub fn mult_aff(m: &BigUint, q: &Point, ec: &CurveGroup) -> Result<Point> {
    let mut m = m.clone();
    let mut q = q.clone();

    // r[0] is the running result, r[1] = r[0] + Q an ancillary value
    let mut r = [Point::infinity(), q.clone()];

    // account for the least significant bit
    let picked = r[m.is_odd() as usize].clone();
    r[0] = picked;
    m >>= 1u32;

    while !m.is_zero() {
        q = ec.double_aff(&q)?;
        // the addition always runs; it lands in r[0] only when the
        // current bit says so
        r[1] = ec.add_aff(&r[0], &q)?;
        let picked = r[m.is_odd() as usize].clone();
        r[0] = picked;
        m >>= 1u32;
    }

    let [r0, _] = r;
    Ok(r0)
}

/// Double-and-add in Jacobian coordinates, right-to-left binary
/// decomposition, with the same indexed commit as the affine variant.
pub fn mult_binary(m: &BigUint, q: &JacPoint, ec: &CurveGroup) -> Result<JacPoint> {
    let mut m = m.clone();
    let mut q = q.clone();

    let mut r = [JacPoint::infinity(), q.clone()];
    // place Q so that r[0] picks it up exactly when the low bit is set
    let slot = !m.is_odd() as usize;
    r[slot] = q.clone();
    m >>= 1u32;

    while !m.is_zero() {
        q = ec.double_jac(&q);
        let sum = ec.add_jac(&r[0], &q);
        let slot = !m.is_odd() as usize;
        r[slot] = sum;
        m >>= 1u32;
    }

    let [r0, _] = r;
    Ok(r0)
}

/// Montgomery ladder, left-to-right: R[1-b] = R[b] + R[1-b] then
/// R[b] = 2 R[b], so the same operation pair runs for every bit.
pub fn mult_mont_ladder(m: &BigUint, q: &JacPoint, ec: &CurveGroup) -> Result<JacPoint> {
    let mut r = [JacPoint::infinity(), q.clone()];

    for bit in to_base(m, 2)? {
        let sum = ec.add_jac(&r[bit], &r[1 - bit]);
        let dbl = ec.double_jac(&r[bit]);
        r[1 - bit] = sum;
        r[bit] = dbl;
    }

    let [r0, _] = r;
    Ok(r0)
}

/// Triple-and-add: left-to-right ternary decomposition, the tripling
/// computed as one doubling plus one addition.
pub fn mult_base_3(m: &BigUint, q: &JacPoint, ec: &CurveGroup) -> Result<JacPoint> {
    // one of these is added at each step, picked by the current trit
    let t = [JacPoint::infinity(), q.clone(), ec.double_jac(q)];

    let digits = to_base(m, 3)?;
    let mut r = t[digits[0]].clone();

    for &d in &digits[1..] {
        let r2 = ec.double_jac(&r);
        let r3 = ec.add_jac(&r2, &r);
        r = ec.add_jac(&r3, &t[d]);
    }

    Ok(r)
}

/// Fixed-window multiplication, left-to-right: w doublings then one
/// table addition per window. For 256-bit scalars w = 4 or 5 are the
/// sweet spot. With `cached` the memoized widest-window table serves
/// the lookups instead of a per-call table.
pub fn mult_fixed_window(
    m: &BigUint,
    q: &JacPoint,
    ec: &CurveGroup,
    w: usize,
    cached: bool,
) -> Result<JacPoint> {
    // a number cannot be written in basis 1
    if w == 0 {
        return Err(CurveError::InvalidInput(format!("non positive w: {}", w)));
    }
    if w > WIDEST_WINDOW {
        return Err(CurveError::InvalidInput(format!("w too large: {}", w)));
    }
    if cached && w > MAX_W {
        return Err(CurveError::InvalidInput(format!(
            "w too large for the shared table: {}",
            w
        )));
    }

    let t: Arc<Vec<JacPoint>> = if cached {
        cached_multiples(q, ec)
    } else {
        Arc::new(multiples(q, 1 << w, ec)?)
    };

    let digits = to_base(m, 1 << w)?;
    let mut r = t[digits[0]].clone();

    for &d in &digits[1..] {
        for _ in 0..w {
            r = ec.double_jac(&r);
        }
        r = ec.add_jac(&r, &t[d]);
    }

    Ok(r)
}

/// Fixed-window multiplication over the per-window cached tables: the
/// hot loop is one addition per window, no doublings at all.
pub fn mult_fixed_window_cached(
    m: &BigUint,
    q: &JacPoint,
    ec: &CurveGroup,
    w: usize,
) -> Result<JacPoint> {
    if w == 0 {
        return Err(CurveError::InvalidInput(format!("non positive w: {}", w)));
    }
    if w > WIDEST_WINDOW {
        return Err(CurveError::InvalidInput(format!("w too large: {}", w)));
    }

    let t = cached_multiples_fixwind(q, ec, w);
    let digits = to_base(m, 1 << w)?;

    // the table covers every window position of a scalar below
    // 2^(psize * 8); anything longer has not been reduced by the caller
    if digits.len() > t.len() {
        return Err(CurveError::OutOfRange(format!(
            "scalar too large for the cached window tables: {} windows",
            digits.len()
        )));
    }

    let mut k = digits.len() - 1;
    let mut r = t[k][digits[0]].clone();

    for &d in &digits[1..] {
        k -= 1;
        r = ec.add_jac(&r, &t[k][d]);
    }

    Ok(r)
}

/*---- TESTS ----*/

#[cfg(test)]
mod mult_test {

    use num_bigint::BigUint;
    use num_traits::Zero;

    use crate::group::jacobian_coords::jac_from_aff;
    use crate::group::Point;
    use crate::mult::{
        mult_aff, mult_fixed_window, mult_jac, mult_jac_with, MultAlgorithm,
    };
    use crate::testutil::low_card_curves;

    const ALGORITHMS: [MultAlgorithm; 6] = [
        MultAlgorithm::DoubleAndAdd,
        MultAlgorithm::MontgomeryLadder,
        MultAlgorithm::TripleAndAdd,
        MultAlgorithm::FixedWindow(4),
        MultAlgorithm::FixedWindow(5),
        MultAlgorithm::FixedWindowCached(4),
    ];

    #[test]
    fn all_algorithms_agree_exhaustively() {
        for (name, ec) in low_card_curves() {
            let gj = jac_from_aff(&ec.g);

            // run well past the group order to cover wrap-around chains
            let order = ec.n.clone();
            let mut k = BigUint::zero();
            let limit = 2u32 * &order;

            while k < limit {
                let reference = ec
                    .aff_from_jac(&mult_jac(&k, &gj, &ec.group).unwrap())
                    .unwrap();

                let affine = mult_aff(&k, &ec.g, &ec.group).unwrap();
                assert_eq!(affine, reference, "{}: k = {}", name, k);

                for algorithm in ALGORITHMS.iter() {
                    let r = mult_jac_with(*algorithm, &k, &gj, &ec.group).unwrap();
                    assert_eq!(
                        ec.aff_from_jac(&r).unwrap(),
                        reference,
                        "{}: k = {} via {:?}",
                        name,
                        k,
                        algorithm
                    );
                }

                k += 1u32;
            }
        }
    }

    #[test]
    fn multiplying_by_zero_gives_infinity() {
        for (_, ec) in low_card_curves() {
            let gj = jac_from_aff(&ec.g);
            let zero = BigUint::zero();

            assert!(mult_jac(&zero, &gj, &ec.group).unwrap().is_infinity());
            assert!(mult_aff(&zero, &ec.g, &ec.group).unwrap().is_infinity());
        }
    }

    #[test]
    fn multiplying_infinity_stays_at_infinity() {
        for (_, ec) in low_card_curves() {
            let infj = jac_from_aff(&Point::infinity());

            for algorithm in ALGORITHMS.iter() {
                let r = mult_jac_with(*algorithm, &BigUint::from(5u32), &infj, &ec.group)
                    .unwrap();
                assert!(r.is_infinity(), "{:?}", algorithm);
            }
        }
    }

    #[test]
    fn shared_table_variant_agrees() {
        for (name, ec) in low_card_curves() {
            let gj = jac_from_aff(&ec.g);

            for k in &[0u32, 1, 7, 19, 40] {
                let k = BigUint::from(*k);
                let plain = mult_fixed_window(&k, &gj, &ec.group, 4, false).unwrap();
                let shared = mult_fixed_window(&k, &gj, &ec.group, 4, true).unwrap();
                let wide = mult_fixed_window(&k, &gj, &ec.group, 5, true).unwrap();

                assert!(ec.jac_equality(&plain, &shared), "{}: k = {}", name, k);
                assert!(ec.jac_equality(&plain, &wide), "{}: k = {}", name, k);
            }

            // the shared table caps the window width
            let k = BigUint::from(3u32);
            assert!(mult_fixed_window(&k, &gj, &ec.group, 6, true).is_err());
        }
    }

    #[test]
    fn zero_window_width_is_rejected() {
        let curves = low_card_curves();
        let (_, ec) = &curves[0];
        let gj = jac_from_aff(&ec.g);
        let m = BigUint::from(5u32);

        assert!(mult_jac_with(MultAlgorithm::FixedWindow(0), &m, &gj, &ec.group).is_err());
        assert!(
            mult_jac_with(MultAlgorithm::FixedWindowCached(0), &m, &gj, &ec.group).is_err()
        );
    }
}
