//! Floating-point coefficients.
//!
//! `f64` is treated as an approximate field. The zero test is an exact
//! comparison against `0.0` with no epsilon: cancellation that leaves a
//! tiny non-zero coefficient keeps that coefficient, so canonicalization
//! stays deterministic. Division-heavy algorithms (GCD chains, root
//! separation) accumulate rounding error with `f64`; use `Q` when exact
//! results matter.

use crate::traits::{Field, Ring};

impl Ring for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn is_one(&self) -> bool {
        *self == 1.0
    }

    #[allow(clippy::cast_precision_loss)]
    fn mul_by_scalar(&self, n: i64) -> Self {
        self * n as f64
    }
}

impl Field for f64 {
    fn inv(&self) -> Option<Self> {
        if Ring::is_zero(self) {
            None
        } else {
            Some(1.0 / self)
        }
    }
}
