//! Modular arithmetic.
//!
//! Integers modulo a compile-time constant `M`. Any modulus gives a
//! ring; `Field` behavior (inverses for every non-zero element) needs
//! `M` prime. Composite moduli are still useful as rings with zero
//! divisors.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{Field, Ring};

/// An integer modulo `M`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModInt<const M: u64>(u64);

impl<const M: u64> ModInt<M> {
    /// Creates a new modular integer.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % M)
    }

    /// Creates a modular integer from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        if value >= 0 {
            Self::new(value.unsigned_abs())
        } else {
            Self((M - value.unsigned_abs() % M) % M)
        }
    }

    /// Returns the value in `0..M`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        M
    }

    /// Computes the modular inverse by the extended Euclidean algorithm.
    ///
    /// Returns `None` when `gcd(self, M) != 1`.
    #[must_use]
    pub fn mod_inv(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let mut t = 0i64;
        let mut new_t = 1i64;
        let mut r = M as i64;
        let mut new_r = self.0 as i64;

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None; // not coprime
        }

        Some(Self::from_signed(t))
    }
}

impl<const M: u64> Ring for ModInt<M> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1 % M)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % M
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        *self * Self::from_signed(n)
    }
}

impl<const M: u64> Field for ModInt<M> {
    fn inv(&self) -> Option<Self> {
        self.mod_inv()
    }
}

impl<const M: u64> Add for ModInt<M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self((self.0 + rhs.0) % M)
    }
}

impl<const M: u64> Sub for ModInt<M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self((self.0 + M - rhs.0) % M)
    }
}

impl<const M: u64> Mul for ModInt<M> {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self((u128::from(self.0) * u128::from(rhs.0) % u128::from(M)) as u64)
    }
}

impl<const M: u64> Neg for ModInt<M> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self((M - self.0) % M)
    }
}

impl<const M: u64> fmt::Debug for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, M)
    }
}

impl<const M: u64> fmt::Display for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
