//! Square-free root separation.
//!
//! A repeated root of `p` is also a root of `p'`, so `g = gcd(p, p')`
//! carries exactly the repeated-root structure. Dividing it out and
//! recursing on `g` peels one multiplicity level per step: the factors
//! returned for `(x-1)·(x-2)³` are `(x-1)(x-2)`, `(x-2)`, `(x-2)` and
//! their product reconstructs `p` up to a non-zero scalar.
//!
//! Exactness depends on exact coefficient division; with `f64` the GCD
//! chain degrades under rounding, so exact types such as `Q` are
//! recommended.

use horner_rings::Field;

use crate::algorithms::div::poly_div;
use crate::algorithms::gcd::poly_gcd;
use crate::dense::Poly;
use crate::error::PolyError;

/// Splits `p` into factors with only simple roots.
///
/// Each returned factor is square-free; the product of all factors
/// equals `p` up to a non-zero scalar. A polynomial that is already
/// square-free comes back as the one-element sequence `[p]`.
///
/// # Errors
///
/// Returns [`PolyError::ZeroPolynomial`] if `p` is the zero polynomial.
pub fn separate_roots<F: Field>(p: &Poly<F>) -> Result<Vec<Poly<F>>, PolyError> {
    if p.is_zero() {
        return Err(PolyError::ZeroPolynomial);
    }

    let mut factors = Vec::new();
    let mut current = p.clone();

    loop {
        let g = poly_gcd(&current, &current.derivative())?;
        if g.is_one() {
            factors.push(current);
            return Ok(factors);
        }
        factors.push(poly_div(&current, &g)?);
        current = g;
    }
}
