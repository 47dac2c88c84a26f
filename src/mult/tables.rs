//! Precomputation tables for the window algorithms, memoized process-wide.
//!
//! The caches key on the (curve, base point) value and never invalidate:
//! a table is a pure function of its key. Reads share an RwLock; a miss
//! computes outside the write lock, so two racing misses merely duplicate
//! deterministic work before one of them wins the insert.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::errors::{CurveError, Result};
use crate::group::{CurveGroup, JacPoint};

/// Widest window served by the shared multiples table
pub const MAX_W: usize = 5;

#[derive(Clone, PartialEq, Eq, Hash)]
struct TableKey {
    curve: CurveGroup,
    point: JacPoint,
}

static MULTIPLES_CACHE: Lazy<RwLock<HashMap<TableKey, Arc<Vec<JacPoint>>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

static FIXWIND_CACHE: Lazy<RwLock<HashMap<(TableKey, usize), Arc<Vec<Vec<JacPoint>>>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Return [0Q, 1Q, ..., (size-1)Q] in Jacobian coordinates.
///
/// Odd entries are doublings of earlier entries, even entries add Q
/// back in, so each entry costs a single group operation.
///
/// ### Arguments
///
/// * `q` - Base point, assumed on curve
/// * `size` - Number of entries, at least 2
/// * `ec` - Curve group to operate from
pub fn multiples(q: &JacPoint, size: usize, ec: &CurveGroup) -> Result<Vec<JacPoint>> {
    if size < 2 {
        return Err(CurveError::InvalidInput(format!("size too low: {}", size)));
    }

    Ok(build_multiples(q, size, ec))
}

fn build_multiples(q: &JacPoint, size: usize, ec: &CurveGroup) -> Vec<JacPoint> {
    let (k, odd) = (size / 2, size % 2 == 1);
    let mut t = vec![JacPoint::infinity(), q.clone()];

    let mut i = 3;
    while i < k * 2 {
        let doubled = ec.double_jac(&t[(i - 1) / 2]);
        let plus_q = ec.add_jac(&doubled, q);
        t.push(doubled);
        t.push(plus_q);
        i += 2;
    }

    if odd {
        let doubled = ec.double_jac(&t[(size - 1) / 2]);
        t.push(doubled);
    }

    t
}

/// Memoized multiples table for the widest supported window: 2^MAX_W
/// entries per (curve, base point) pair, shared across calls.
pub fn cached_multiples(q: &JacPoint, ec: &CurveGroup) -> Arc<Vec<JacPoint>> {
    let key = TableKey {
        curve: ec.clone(),
        point: q.clone(),
    };

    if let Some(hit) = MULTIPLES_CACHE
        .read()
        .expect("poisoned multiples cache")
        .get(&key)
    {
        return hit.clone();
    }

    debug!(entries = 1usize << MAX_W, "precomputing multiples table");
    let table = Arc::new(build_multiples(q, 1 << MAX_W, ec));

    MULTIPLES_CACHE
        .write()
        .expect("poisoned multiples cache")
        .entry(key)
        .or_insert(table)
        .clone()
}

/// Memoized per-window tables for `mult_fixed_window_cached`: row i
/// holds digit * 2^(w*i) * Q for every digit below 2^w, one row per
/// window position of a p-sized scalar.
///
/// The caller guarantees w >= 1.
pub fn cached_multiples_fixwind(
    q: &JacPoint,
    ec: &CurveGroup,
    w: usize,
) -> Arc<Vec<Vec<JacPoint>>> {
    let key = (
        TableKey {
            curve: ec.clone(),
            point: q.clone(),
        },
        w,
    );

    if let Some(hit) = FIXWIND_CACHE
        .read()
        .expect("poisoned window cache")
        .get(&key)
    {
        return hit.clone();
    }

    debug!(width = w, "precomputing per-window multiples tables");
    let rows = (ec.psize * 8) / w + 1;
    let mut t = Vec::with_capacity(rows);
    let mut k = q.clone();

    for _ in 0..rows {
        let row = build_multiples(&k, 1 << w, ec);
        // the next row is based at 2^w times the current one
        k = ec.double_jac(&row[1 << (w - 1)]);
        t.push(row);
    }

    let table = Arc::new(t);

    FIXWIND_CACHE
        .write()
        .expect("poisoned window cache")
        .entry(key)
        .or_insert(table)
        .clone()
}

/*---- TESTS ----*/
