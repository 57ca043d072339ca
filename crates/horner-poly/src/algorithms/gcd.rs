//! Polynomial GCD over a field.

use horner_rings::Field;

use crate::algorithms::div::poly_rem;
use crate::dense::Poly;
use crate::error::PolyError;

/// Makes a polynomial monic (leading coefficient 1).
///
/// The zero polynomial is returned unchanged; its leading coefficient
/// is never inverted.
#[must_use]
pub fn make_monic<F: Field>(p: &Poly<F>) -> Poly<F> {
    match p.leading_coeff() {
        None => p.clone(),
        Some(lead) => {
            let lead_inv = lead
                .inv()
                .expect("leading coefficient of a canonical polynomial is non-zero");
            p.scale(&lead_inv)
        }
    }
}

/// Computes the monic GCD of two polynomials by Euclid's algorithm.
///
/// Each step replaces `(a, b)` with `(b, a mod b)`; the remainder's
/// degree strictly decreases, so the loop terminates. When one operand
/// is zero the result is the monic form of the other.
///
/// # Errors
///
/// Returns [`PolyError::UndefinedGcd`] if both operands are zero.
pub fn poly_gcd<F: Field>(a: &Poly<F>, b: &Poly<F>) -> Result<Poly<F>, PolyError> {
    if a.is_zero() && b.is_zero() {
        return Err(PolyError::UndefinedGcd);
    }

    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let r = poly_rem(&p, &q)?;
        p = q;
        q = r;
    }

    Ok(make_monic(&p))
}
