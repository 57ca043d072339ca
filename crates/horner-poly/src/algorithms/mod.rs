//! Polynomial algorithms.
//!
//! This module contains:
//! - Quotient/remainder division and deflation by a linear factor
//! - Polynomial GCD and monic normalization
//! - Square-free root separation

pub mod div;
pub mod gcd;
pub mod squarefree;
