//! Binomial expansion terms.
//!
//! ## Purpose
//!
//! Produces the ordered terms of `(a + b)^n` as numeric triples
//! `(coefficient, a exponent, b exponent)`. Rendering the terms is left to
//! the caller; [`Expansion`] offers a plain-text `Display` for convenience.
//!
//! ## Invariants
//!
//! * There are exactly `n + 1` terms, ordered by increasing `b` exponent.
//! * `a_exponent + b_exponent == n` for every term.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::Serialize;

// Internal dependencies
use crate::math::binomial::{coefficient, to_integer};

/// One term `coefficient * a^a_exponent * b^b_exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ExpansionTerm<T> {
    /// Binomial coefficient `C(n, k)`.
    pub coefficient: T,

    /// Exponent of `a`, `n - k`.
    pub a_exponent: usize,

    /// Exponent of `b`, `k`.
    pub b_exponent: usize,
}

/// Terms of `(a + b)^n` for `k = 0..=n`.
pub fn expansion_terms<T: Float>(n: usize) -> Vec<ExpansionTerm<T>> {
    (0..=n)
        .map(|k| ExpansionTerm {
            coefficient: coefficient(n, k),
            a_exponent: n - k,
            b_exponent: k,
        })
        .collect()
}

/// The full expansion of `(a + b)^n`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Expansion<T> {
    /// Exponent `n`.
    pub exponent: usize,

    /// Ordered terms.
    pub terms: Vec<ExpansionTerm<T>>,
}

impl<T: Float> Expansion<T> {
    /// Expand `(a + b)^n`.
    pub fn new(exponent: usize) -> Self {
        Self {
            exponent,
            terms: expansion_terms(exponent),
        }
    }
}

impl<T: Float> fmt::Display for ExpansionTerm<T> {
    /// Writes `3a^2b`, omitting a unit coefficient and unit exponents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficient = to_integer(self.coefficient);
        let no_variables = self.a_exponent == 0 && self.b_exponent == 0;
        match coefficient {
            Some(1) if !no_variables => {}
            Some(c) => write!(f, "{}", c)?,
            None => write!(f, "{}", self.coefficient.to_f64().unwrap_or(f64::NAN))?,
        }
        write_power(f, 'a', self.a_exponent)?;
        write_power(f, 'b', self.b_exponent)
    }
}

fn write_power(f: &mut fmt::Formatter<'_>, var: char, exponent: usize) -> fmt::Result {
    match exponent {
        0 => Ok(()),
        1 => write!(f, "{}", var),
        e => write!(f, "{}^{}", var, e),
    }
}

impl<T: Float> fmt::Display for Expansion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(a + b)^{} = ", self.exponent)?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
