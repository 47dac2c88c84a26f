//! Elliptic-curve group arithmetic over prime fields in short
//! Weierstrass form.
//!
//! The crate validates curve and subgroup parameters, implements the
//! group law in affine and Jacobian coordinates, recovers y-coordinates
//! with the usual symmetry breakers (parity, magnitude, quadratic
//! residue), and builds several scalar-multiplication strategies on top:
//! binary double-and-add, the Montgomery ladder, ternary triple-and-add
//! and two fixed-window variants, plus Shamir-Strauss double-scalar and
//! Bos-Coster multi-scalar multiplication. A registry of the SEC 2,
//! NIST and Brainpool curves rounds it out.
//!
//! Correctness is checked against standard test vectors and by
//! exhaustive enumeration on curves of very low cardinality.

pub mod curve;
pub mod curves;
pub mod dh;
pub mod encoding;
pub mod errors;
pub mod group;
pub mod mult;
pub mod numbertheory;

#[cfg(test)]
pub(crate) mod testutil;

pub use curve::{double_mult, mult, multi_mult, Curve};
pub use curves::{curve_by_name, secp256k1, CURVES};
pub use errors::{CurveError, Result};
pub use group::{CurveGroup, JacPoint, Point};
pub use mult::MultAlgorithm;
