//! # horner-poly
//!
//! Dense univariate polynomial arithmetic over generic coefficients.
//!
//! This crate provides:
//! - A canonical, zero-trimmed coefficient representation ([`Poly`])
//!   with explicit little/big-endian construction and accessors
//! - Ring arithmetic: add, scale, negate, multiply, power, compose
//! - Quotient/remainder division and deflation by a linear factor
//! - Horner evaluation, including simultaneous derivative evaluation
//! - Formal derivative and antiderivative
//! - Polynomial GCD and square-free root separation
//!
//! Operations that only rearrange and combine coefficients are generic
//! over any [`Ring`](horner_rings::Ring) scalar; operations that divide
//! coefficients (division, GCD, integration, monic normalization, root
//! separation) require a [`Field`](horner_rings::Field).
//!
//! ## Example
//!
//! ```
//! use horner_poly::{Endianness, Poly};
//! use horner_rings::Q;
//!
//! // 3x^2 + 2x + 1
//! let p = Poly::new(
//!     Endianness::Little,
//!     vec![Q::from_integer(1), Q::from_integer(2), Q::from_integer(3)],
//! );
//! assert_eq!(p.degree(), Some(2));
//! assert_eq!(p.eval(&Q::from_integer(2)), Q::from_integer(17));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod error;

#[cfg(test)]
mod proptests;

pub use algorithms::div::{contract, poly_div, poly_div_rem, poly_rem};
pub use algorithms::gcd::{make_monic, poly_gcd};
pub use algorithms::squarefree::separate_roots;
pub use dense::{Endianness, Poly};
pub use error::PolyError;
