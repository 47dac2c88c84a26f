//! Shamir-Strauss double-scalar multiplication.
//!
//! u*H + v*Q runs as a single left-to-right double-and-add loop over the
//! joint binary digits of u and v, with a 4-entry table [INF, H, Q,
//! H + Q]: the two multiplications share every doubling, and the Shamir
//! trick pays one precomputed addition for the both-bits-set case.

use num_bigint::BigUint;

use crate::encoding::to_base;
use crate::errors::Result;
use crate::group::{CurveGroup, JacPoint};

/// Double scalar multiplication u*H + v*Q.
///
/// The points are assumed to be on the curve; the coefficients are
/// assumed to have been reduced mod n where appropriate.
///
/// ### Arguments
///
/// * `u` - First coefficient
/// * `h` - First base point
/// * `v` - Second coefficient
/// * `q` - Second base point
/// * `ec` - Curve group to operate from
pub fn double_mult_jac(
    u: &BigUint,
    h: &JacPoint,
    v: &BigUint,
    q: &JacPoint,
    ec: &CurveGroup,
) -> Result<JacPoint> {
    // one of these is added at every step, picked by u_i + 2 v_i
    let t = [
        JacPoint::infinity(),
        h.clone(),
        q.clone(),
        ec.add_jac(h, q),
    ];

    let mut ui = to_base(u, 2)?;
    let mut vi = to_base(v, 2)?;

    // left-pad the shorter expansion so the digits line up
    while ui.len() < vi.len() {
        ui.insert(0, 0);
    }
    while vi.len() < ui.len() {
        vi.insert(0, 0);
    }

    let digits: Vec<usize> = ui
        .iter()
        .zip(vi.iter())
        .map(|(&j, &k)| j + 2 * k)
        .collect();

    let mut r = t[digits[0]].clone();
    for &d in &digits[1..] {
        r = ec.double_jac(&r);
        // the addition always runs; the infinity table entry makes the
        // zero-digit case a no-op
        r = ec.add_jac(&r, &t[d]);
    }

    Ok(r)
}

/*---- TESTS ----*/
