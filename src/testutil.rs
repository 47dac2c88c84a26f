//! Shared fixtures for the test modules: the toy curves of very low
//! cardinality used for exhaustive sweeps, and a deterministic second
//! generator.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::curve::Curve;
use crate::group::{CurveGroup, Point};

fn toy(p: u32, a: u32, b: u32, gx: u32, gy: u32, n: u32, h: u32) -> Curve {
    Curve::new(
        BigUint::from(p),
        BigUint::from(a),
        BigUint::from(b),
        Point::new(BigUint::from(gx), BigUint::from(gy)),
        BigUint::from(n),
        h,
        false,
    )
    .expect("toy curve parameters are valid")
}

/// The eight exhaustive-test curves, covering every residue class of p
/// mod 8 that matters to the square-root code.
pub fn low_card_curves() -> Vec<(&'static str, Curve)> {
    vec![
        // 13 % 4 = 1; 13 % 8 = 5
        ("ec13_11", toy(13, 7, 6, 1, 1, 11, 1)),
        ("ec13_19", toy(13, 0, 2, 1, 9, 19, 1)),
        // 17 % 4 = 1; 17 % 8 = 1
        ("ec17_13", toy(17, 6, 8, 0, 12, 13, 2)),
        ("ec17_23", toy(17, 3, 5, 1, 14, 23, 1)),
        // 19 % 4 = 3; 19 % 8 = 3
        ("ec19_13", toy(19, 0, 2, 4, 16, 13, 2)),
        ("ec19_23", toy(19, 2, 9, 0, 16, 23, 1)),
        // 23 % 4 = 3; 23 % 8 = 7
        ("ec23_19", toy(23, 9, 7, 5, 4, 19, 1)),
        ("ec23_31", toy(23, 5, 1, 0, 1, 31, 1)),
    ]
}

/// The secp256k1 group with its generator, without going through the
/// registry; handy for tests below the `curve` layer.
pub fn secp256k1_group() -> (CurveGroup, Point) {
    use num_traits::Num;

    let p = BigUint::from_str_radix(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        16,
    )
    .unwrap();
    let gx = BigUint::from_str_radix(
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        16,
    )
    .unwrap();
    let gy = BigUint::from_str_radix(
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        16,
    )
    .unwrap();

    let ec = CurveGroup::new(p, BigUint::zero(), BigUint::from(7u32)).unwrap();
    (ec, Point::new(gx, gy))
}

/// Deterministic second generator: the finite curve point with the
/// smallest x that is distinct from G and -G, taking the even root.
/// On the cofactor-1 curves used in tests the whole curve is the
/// subgroup, so any such point generates it.
pub fn second_generator(ec: &Curve) -> Point {
    let mut x = BigUint::zero();

    loop {
        if let Ok(y) = ec.y_odd(&x, false) {
            let candidate = Point::new(x.clone(), y);
            if !candidate.is_infinity()
                && candidate != ec.g
                && candidate != ec.negate(&ec.g)
            {
                return candidate;
            }
        }
        x += BigUint::one();
    }
}
