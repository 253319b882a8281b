//! Coefficient table generation.
//!
//! ## Purpose
//!
//! Builds a complete [`Table`] for a row count. Every cell is computed
//! independently with [`coefficient`]; the additive recurrence is never used
//! for generation and only serves as a check in `evaluation::identities`.
//!
//! ## Invariants
//!
//! * The table has exactly `row_count` rows and row `n` has `n + 1` entries.
//! * `row_count == 0` yields an empty table.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::binomial::coefficient;
use crate::primitives::table::Table;

/// Generate the first `row_count` rows of Pascal's triangle.
pub fn generate_table<T: Float>(row_count: usize) -> Table<T> {
    let rows: Vec<Vec<T>> = (0..row_count)
        .map(|n| (0..=n).map(|k| coefficient(n, k)).collect())
        .collect();
    Table::from_rows(rows)
}
