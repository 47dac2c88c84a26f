//! Diffie-Hellman key agreement over a curve subgroup (SEC 1 v.2,
//! section 6.1).
//!
//! The scheme stops at the shared field element: the x-coordinate of
//! d * Q. Deriving keying material from it (the ANSI X9.63 KDF of the
//! standard) is a consumer concern, together with the choice of hash.

use num_bigint::{BigInt, BigUint};

use crate::curve::{mult, Curve};
use crate::errors::{CurveError, Result};
use crate::group::Point;

/// Shared-secret field element z = x(d * Q), where d is the local
/// private value and Q the peer public point. An infinity result is
/// rejected as an invalid key.
///
/// ### Arguments
///
/// * `d` - Local private value
/// * `q` - Peer public point
/// * `ec` - Agreed-upon curve
pub fn shared_secret(d: &BigInt, q: &Point, ec: &Curve) -> Result<BigUint> {
    let z = mult(d, q, ec)?;

    if z.is_infinity() {
        return Err(CurveError::InvalidInput("invalid (INF) key".to_string()));
    }

    Ok(z.x)
}

/*---- TESTS ----*/
