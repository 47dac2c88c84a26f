//! Error taxonomy of the curve engine.
//!
//! All validation happens at public-API entry; the internal primitives
//! trust the preconditions documented in their contracts, so no error is
//! caught and converted internally. Messages carry the offending value,
//! formatted as hex once it grows past 2^32 (see `encoding::int_string`).

use thiserror::Error;

/// Convenience alias for fallible curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// Curve or subgroup constructor input violates the SEC 1 checks
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input point fails the curve equation
    #[error("point not on curve: {0}")]
    NotOnCurve(String),

    /// Coordinate or scalar outside its admissible interval
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// y-coordinate recovery requested for an x with no square root
    #[error("no square root: {0}")]
    NoSquareRoot(String),

    /// Quadratic-residue symmetry breaking needs p = 3 mod 4
    #[error("field prime is not equal to 3 mod 4: {0}")]
    WrongPrimeForm(String),

    /// Structurally malformed input (length mismatch, bad radix, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
