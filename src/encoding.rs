//! Radix decomposition and display formatting for arbitrary-precision
//! integers. The window-based multiplication algorithms consume the
//! digit sequences produced here.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::errors::{CurveError, Result};

/// Integers wider than this many bits are printed as hex for legibility
const HEX_THRESHOLD_BITS: u64 = 32;

/// Format an integer for error messages and diagnostics: decimal while
/// it fits 32 bits, 0x-prefixed hex beyond that.
pub fn int_string(i: &BigUint) -> String {
    if i.bits() > HEX_THRESHOLD_BITS {
        format!("0x{}", i.to_str_radix(16))
    } else {
        i.to_str_radix(10)
    }
}

/// Return the big-endian digits of `i` in the requested base.
///
/// Zero decomposes to a single zero digit, so the result is never empty.
///
/// ### Arguments
///
/// * `i` - Nonnegative integer to decompose
/// * `base` - Radix, at least 2
pub fn to_base(i: &BigUint, base: usize) -> Result<Vec<usize>> {
    if base < 2 {
        return Err(CurveError::InvalidInput(format!(
            "base must be at least 2: {}",
            base
        )));
    }

    let big_base = BigUint::from(base);
    let mut i = i.clone();
    let mut digits = Vec::new();

    while !i.is_zero() || digits.is_empty() {
        let (q, r) = i.div_rem(&big_base);
        // the remainder is below `base`, so it always fits a usize
        digits.push(r.to_usize().unwrap());
        i = q;
    }

    digits.reverse();
    Ok(digits)
}

/*---- TESTS ----*/
