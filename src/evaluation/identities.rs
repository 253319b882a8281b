//! Structural identity checks and row sums.
//!
//! ## Purpose
//!
//! Verifies that a generated table satisfies the defining identities of
//! Pascal's triangle, and reports row sums next to their expected powers of
//! two for the row-sum diagram.
//!
//! ## Key concepts
//!
//! * **Edges**: `C(n, 0) == C(n, n) == 1`.
//! * **Symmetry**: `C(n, k) == C(n, n - k)`.
//! * **Recurrence**: `C(n, k) == C(n - 1, k - 1) + C(n - 1, k)` for `0 < k < n`.
//! * **Row sums**: `Σ_k C(n, k) == 2^n`.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: `verify_table` stops at the first violated identity.
//! * **Tolerance**: Comparisons are relative to [`INTEGRALITY_TOLERANCE`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::Serialize;

// Internal dependencies
use crate::math::binomial::{INTEGRALITY_TOLERANCE, cast, to_integer};
use crate::primitives::errors::PascalError;
use crate::primitives::table::Table;

/// Whether `a` and `b` agree within the relative integrality tolerance.
#[inline]
fn approx_eq<T: Float>(a: T, b: T) -> bool {
    let tolerance = T::from(INTEGRALITY_TOLERANCE).unwrap_or_else(T::epsilon);
    (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(T::one())
}

/// Check edges, symmetry, recurrence and integrality of every row.
pub fn verify_table<T: Float>(table: &Table<T>) -> Result<(), PascalError> {
    for (n, row) in table.rows().iter().enumerate() {
        if row.len() != n + 1 {
            return Err(PascalError::IdentityViolation(format!(
                "row {} has {} entries, expected {}",
                n,
                row.len(),
                n + 1
            )));
        }

        if row[0] != T::one() || row[n] != T::one() {
            return Err(PascalError::IdentityViolation(format!(
                "row {} does not start and end with 1",
                n
            )));
        }

        for k in 0..=n {
            let value = row[k];
            if to_integer(value).is_none() {
                return Err(PascalError::IdentityViolation(format!(
                    "C({}, {}) = {} is not an integer",
                    n,
                    k,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }

            if !approx_eq(value, row[n - k]) {
                return Err(PascalError::IdentityViolation(format!(
                    "C({}, {}) != C({}, {})",
                    n,
                    k,
                    n,
                    n - k
                )));
            }

            if k > 0 && k < n {
                let prev = &table.rows()[n - 1];
                if !approx_eq(value, prev[k - 1] + prev[k]) {
                    return Err(PascalError::IdentityViolation(format!(
                        "C({}, {}) != C({}, {}) + C({}, {})",
                        n,
                        k,
                        n - 1,
                        k - 1,
                        n - 1,
                        k
                    )));
                }
            }
        }
    }

    Ok(())
}

/// Row total alongside the `2^n` it should equal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RowSum<T> {
    /// Row index `n`.
    pub row: usize,

    /// Sum of the row's coefficients.
    pub sum: T,

    /// `2^n`.
    pub expected: T,
}

impl<T: Float> RowSum<T> {
    /// Whether the computed sum equals `2^n`.
    #[inline]
    pub fn matches(&self) -> bool {
        approx_eq(self.sum, self.expected)
    }
}

/// Sum of every row.
pub fn row_sums<T: Float>(table: &Table<T>) -> Vec<RowSum<T>> {
    let two: T = cast(2);
    (0..table.row_count())
        .filter_map(|n| {
            table.row_sum(n).map(|sum| RowSum {
                row: n,
                sum,
                expected: two.powi(n as i32),
            })
        })
        .collect()
}
