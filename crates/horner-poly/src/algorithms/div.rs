//! Polynomial division.
//!
//! Generalized synthetic division: the running remainder is processed
//! highest-order-first, one quotient digit per step. Full division
//! needs a field (each digit divides by the divisor's leading
//! coefficient); deflation by a monic linear factor `x - a` only
//! rearranges ring operations and is provided separately as
//! [`contract`].

use horner_rings::{Field, Ring};

use crate::dense::Poly;
use crate::error::PolyError;

/// Divides `a` by `b`, returning `(quotient, remainder)`.
///
/// The results satisfy `a == q·b + r` with `r` zero or
/// `deg r < deg b`.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `b` is the zero
/// polynomial; the check happens before any computation.
pub fn poly_div_rem<F: Field>(a: &Poly<F>, b: &Poly<F>) -> Result<(Poly<F>, Poly<F>), PolyError> {
    let db = b.degree().ok_or(PolyError::DivisionByZero)?;

    let Some(da) = a.degree() else {
        return Ok((Poly::zero(), Poly::zero()));
    };
    if da < db {
        return Ok((Poly::zero(), a.clone()));
    }

    let lead_inv = b
        .leading_coeff()
        .expect("non-zero polynomial has a leading coefficient")
        .inv()
        .expect("leading coefficient of a canonical polynomial is non-zero");

    let mut quotient = vec![F::zero(); da - db + 1];
    let mut rem = a.coeffs_le().to_vec();

    // One step per quotient digit: divide out the running remainder's
    // leading term and drop it. Popping unconditionally keeps the step
    // count at deg(a) - deg(b) + 1 even when rounding leaves residue.
    while rem.len() > db {
        let top = rem.pop().expect("remainder is longer than the divisor");
        let digit = top * lead_inv.clone();
        let shift = rem.len() - db;

        if !digit.is_zero() {
            for (i, bc) in b.coeffs_le()[..db].iter().enumerate() {
                rem[shift + i] = rem[shift + i].clone() - digit.clone() * bc.clone();
            }
        }

        quotient[shift] = digit;
    }

    Ok((Poly::from_le(quotient), Poly::from_le(rem)))
}

/// Returns only the quotient of `a / b`.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
pub fn poly_div<F: Field>(a: &Poly<F>, b: &Poly<F>) -> Result<Poly<F>, PolyError> {
    poly_div_rem(a, b).map(|(q, _)| q)
}

/// Returns only the remainder of `a / b`.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
pub fn poly_rem<F: Field>(a: &Poly<F>, b: &Poly<F>) -> Result<Poly<F>, PolyError> {
    poly_div_rem(a, b).map(|(_, r)| r)
}

/// Deflates `p` by the linear factor `x - a`.
///
/// Returns `(q, r)` with `q·(x - a) + r == p`; the scalar remainder `r`
/// equals `p.eval(a)`. A single highest-to-lowest synthetic-division
/// pass, so any `Ring` coefficient type works.
#[must_use]
pub fn contract<R: Ring>(p: &Poly<R>, a: &R) -> (Poly<R>, R) {
    let coeffs = p.coeffs_le();
    if coeffs.is_empty() {
        return (Poly::zero(), R::zero());
    }

    let mut quotient = vec![R::zero(); coeffs.len() - 1];
    let mut carry = R::zero();

    for (i, c) in coeffs.iter().enumerate().rev() {
        let v = c.clone() + carry.clone() * a.clone();
        if i == 0 {
            return (Poly::from_le(quotient), v);
        }
        quotient[i - 1] = v.clone();
        carry = v;
    }

    unreachable!("loop returns at index 0")
}
