//! Bos-Coster multi-scalar multiplication.
//!
//! A max-heap of (scalar, point) pairs is reduced by repeatedly popping
//! the two largest scalars and replacing them with their difference:
//! n1*P1 + n2*P2 = (n1 - n2)*P1 + n2*(P1 + P2). One long addition chain
//! becomes a short difference chain; the survivor finishes through the
//! default single-scalar algorithm.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{CurveError, Result};
use crate::group::{CurveGroup, JacPoint};
use crate::mult::mult_jac;

/// Heap entry ordered by scalar value alone; the point tags along.
struct Entry {
    n: BigUint,
    point: JacPoint,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.n.cmp(&other.n)
    }
}

/// Multi scalar multiplication u1*Q1 + ... + un*Qn.
///
/// Zero scalars are dropped up front (they would never leave the heap)
/// and an empty product is infinity. The points are assumed to be on
/// the curve; the coefficients are assumed to have been reduced mod n
/// where appropriate. The result does not depend on the input order.
pub fn multi_mult_jac(
    scalars: &[BigUint],
    points: &[JacPoint],
    ec: &CurveGroup,
) -> Result<JacPoint> {
    if scalars.len() != points.len() {
        return Err(CurveError::InvalidInput(format!(
            "mismatch between number of scalars and points: {} vs {}",
            scalars.len(),
            points.len()
        )));
    }

    let mut heap: BinaryHeap<Entry> = scalars
        .iter()
        .zip(points.iter())
        .filter(|(n, _)| !n.is_zero())
        .map(|(n, p)| Entry {
            n: n.clone(),
            point: p.clone(),
        })
        .collect();

    if heap.is_empty() {
        return Ok(JacPoint::infinity());
    }

    while heap.len() > 1 {
        let first = heap.pop().expect("heap holds at least two entries");
        let second = heap.pop().expect("heap holds at least two entries");

        // first.n >= second.n by heap order
        let merged = ec.add_jac(&first.point, &second.point);
        let difference = first.n - &second.n;

        if !difference.is_zero() {
            heap.push(Entry {
                n: difference,
                point: first.point,
            });
        }
        heap.push(Entry {
            n: second.n,
            point: merged,
        });
    }

    let last = heap.pop().expect("heap holds exactly one entry");
    mult_jac(&last.n, &last.point, ec)
}

/*---- TESTS ----*/
