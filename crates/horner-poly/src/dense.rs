//! Dense univariate polynomials.
//!
//! Coefficients are stored little-endian (index 0 is the constant term)
//! and kept canonical: the vector is empty for the zero polynomial, and
//! otherwise its last entry (the leading coefficient) is non-zero.
//! Canonical form is what makes `degree` well-defined and `==`
//! mathematically meaningful.
//!
//! Every operation returns a fresh polynomial; nothing mutates an input.

use horner_rings::{Field, Ring};

use crate::error::PolyError;

/// Coefficient ordering for construction and accessors.
///
/// Callers always state the order explicitly; storage order is an
/// internal detail.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Endianness {
    /// Constant term first.
    Little,
    /// Highest-order term first.
    Big,
}

/// A dense univariate polynomial with coefficients in `R`.
#[derive(Clone, PartialEq, Debug)]
pub struct Poly<R: Ring> {
    /// Little-endian, canonically trimmed. Empty means zero.
    coeffs: Vec<R>,
}

impl<R: Ring + Eq> Eq for Poly<R> {}

impl<R: Ring> Poly<R> {
    /// Creates a polynomial from coefficients in the given order.
    ///
    /// Trailing (highest-order) zero coefficients are trimmed, so the
    /// result is canonical regardless of the input.
    #[must_use]
    pub fn new(order: Endianness, mut coeffs: Vec<R>) -> Self {
        if order == Endianness::Big {
            coeffs.reverse();
        }
        Self::from_le(coeffs)
    }

    /// Builds from little-endian coefficients, trimming the high end.
    pub(crate) fn from_le(mut coeffs: Vec<R>) -> Self {
        while coeffs.last().map_or(false, |c| c.is_zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::from_le(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self {
            coeffs: vec![R::zero(), R::one()],
        }
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    /// Returns the leading coefficient, or `None` for the zero
    /// polynomial. Never zero when present.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.coeffs.last()
    }

    /// Returns the coefficient of x^i (zero beyond the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns a copy of the coefficients in the requested order.
    ///
    /// The stored form is already canonical, so no trimming happens
    /// here; the zero polynomial yields an empty vector.
    #[must_use]
    pub fn coeffs(&self, order: Endianness) -> Vec<R> {
        let mut out = self.coeffs.clone();
        if order == Endianness::Big {
            out.reverse();
        }
        out
    }

    /// Borrows the coefficients in little-endian order.
    #[must_use]
    pub fn coeffs_le(&self) -> &[R] {
        &self.coeffs
    }

    /// Multiplies every coefficient by a scalar.
    ///
    /// A zero scalar short-circuits to the zero polynomial.
    #[must_use]
    pub fn scale(&self, s: &R) -> Self {
        if s.is_zero() {
            return Self::zero();
        }
        Self::from_le(self.coeffs.iter().map(|c| c.clone() * s.clone()).collect())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.coeff(i);
            let b = other.coeff(i);
            result.push(a + b);
        }

        Self::from_le(result)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Sums a sequence of polynomials into one accumulation buffer.
    ///
    /// Returns zero for an empty slice.
    #[must_use]
    pub fn sum(polys: &[Self]) -> Self {
        let len = polys.iter().map(|p| p.coeffs.len()).max().unwrap_or(0);
        let mut acc = vec![R::zero(); len];

        for p in polys {
            for (slot, c) in acc.iter_mut().zip(&p.coeffs) {
                *slot = slot.clone() + c.clone();
            }
        }

        Self::from_le(acc)
    }

    /// Multiplies two polynomials by schoolbook convolution.
    ///
    /// Zero coefficients of the left operand are skipped; the result is
    /// identical to the naive convolution.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut result = vec![R::zero(); self.coeffs.len() + other.coeffs.len() - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        // Rings with zero divisors can cancel the leading product.
        Self::from_le(result)
    }

    /// Raises the polynomial to an integer power by square-and-multiply.
    ///
    /// `p.pow(0)` is the constant polynomial 1, even for the zero
    /// polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeExponent`] if `n < 0`.
    pub fn pow(&self, n: i64) -> Result<Self, PolyError> {
        if n < 0 {
            return Err(PolyError::NegativeExponent(n));
        }
        if n == 0 {
            return Ok(Self::one());
        }
        if n == 1 {
            return Ok(self.clone());
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        Ok(result)
    }

    /// Substitutes `inner` for the variable, returning the composed
    /// polynomial `self ∘ inner`.
    ///
    /// Horner's rule lifted to polynomial coefficients: a fold from the
    /// highest-order coefficient down, `acc ↦ acc·inner + c`. This costs
    /// O(deg(self)² · deg(inner)); callers that only need values should
    /// evaluate `inner` first and feed the result to [`Poly::eval`].
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        let mut acc = Self::zero();
        for c in self.coeffs.iter().rev() {
            acc = acc.mul(inner).add_constant(c.clone());
        }
        acc
    }

    /// Adds a scalar into the constant term.
    fn add_constant(mut self, c: R) -> Self {
        if c.is_zero() {
            return self;
        }
        if self.coeffs.is_empty() {
            return Self::constant(c);
        }
        self.coeffs[0] = self.coeffs[0].clone() + c;
        if self.coeffs.len() == 1 && self.coeffs[0].is_zero() {
            self.coeffs.clear();
        }
        self
    }

    /// Evaluates the polynomial at a point using Horner's method.
    ///
    /// Evaluation at zero reads the constant term directly instead of
    /// multiplying through; same value, fewer rounding steps for
    /// floating-point coefficients.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        if x.is_zero() {
            return self.coeffs.first().cloned().unwrap_or_else(R::zero);
        }

        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Evaluates the polynomial and its first derivative in one pass.
    ///
    /// Consistent with `(self.eval(x), self.derivative().eval(x))`.
    #[must_use]
    pub fn eval_deriv(&self, x: &R) -> (R, R) {
        let mut value = R::zero();
        let mut deriv = R::zero();

        for c in self.coeffs.iter().rev() {
            deriv = deriv * x.clone() + value.clone();
            value = value * x.clone() + c.clone();
        }

        (value, deriv)
    }

    /// Evaluates the polynomial and all of its derivatives at a point.
    ///
    /// Entry `i` of the result is the value of the i-th derivative, so
    /// the sequence has `deg + 1` entries (a single entry for a zero or
    /// constant polynomial).
    ///
    /// One pass of repeated synthetic division accumulates the Taylor
    /// coefficients of the polynomial at `x`; entry `i` is then scaled
    /// by `i!`, since the i-th Taylor coefficient is the i-th derivative
    /// value divided by `i!`.
    #[must_use]
    pub fn eval_derivs(&self, x: &R) -> Vec<R> {
        if self.coeffs.len() <= 1 {
            return vec![self.coeffs.first().cloned().unwrap_or_else(R::zero)];
        }

        let n = self.coeffs.len() - 1;
        let mut taylor = vec![R::zero(); n + 1];

        for c in self.coeffs.iter().rev() {
            for j in (1..=n).rev() {
                taylor[j] = taylor[j].clone() * x.clone() + taylor[j - 1].clone();
            }
            taylor[0] = taylor[0].clone() * x.clone() + c.clone();
        }

        let mut factorial = R::one();
        for (i, t) in taylor.iter_mut().enumerate().skip(2) {
            factorial = factorial.mul_by_scalar(i as i64);
            *t = t.clone() * factorial.clone();
        }

        taylor
    }

    /// Computes the formal derivative.
    ///
    /// Re-trims afterwards: in finite characteristic the leading term
    /// can vanish.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        for (i, c) in self.coeffs.iter().enumerate().skip(1) {
            result.push(c.mul_by_scalar(i as i64));
        }

        Self::from_le(result)
    }
}

impl<F: Field> Poly<F> {
    /// Computes the antiderivative with constant term 0.
    ///
    /// # Panics
    ///
    /// Panics if some `i + 1` up to the degree is not invertible in the
    /// coefficient field (finite characteristic).
    #[must_use]
    pub fn integral(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.coeffs.len() + 1);
        result.push(F::zero());
        for (i, c) in self.coeffs.iter().enumerate() {
            let step = F::one().mul_by_scalar(i as i64 + 1);
            result.push(c.field_div(&step));
        }

        Self::from_le(result)
    }
}
