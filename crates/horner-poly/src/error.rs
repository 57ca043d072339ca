//! Error conditions for polynomial operations.

use thiserror::Error;

/// Errors raised by polynomial operations.
///
/// All variants are precondition violations: they are reported before
/// any computation proceeds, and no operation returns a partial or
/// sentinel result in their place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor in a quotient/remainder computation was the zero
    /// polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// A polynomial was raised to a negative power.
    #[error("cannot raise a polynomial to the negative power {0}")]
    NegativeExponent(i64),

    /// The GCD of two zero polynomials was requested.
    #[error("gcd of two zero polynomials is undefined")]
    UndefinedGcd,

    /// Root separation was requested for the zero polynomial.
    #[error("cannot separate the roots of the zero polynomial")]
    ZeroPolynomial,
}
