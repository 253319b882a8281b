//! Single-cell inspection.
//!
//! ## Purpose
//!
//! Collects everything a renderer shows when a cell is selected: the exact
//! integer value, its primality, the two parents it is the sum of, and the
//! mirror cell across the symmetry axis.
//!
//! ## Non-goals
//!
//! * This module does not format the combination formula.

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::Serialize;

// Internal dependencies
use crate::math::binomial::to_integer;
use crate::math::primes::is_prime;
use crate::primitives::errors::PascalError;
use crate::primitives::table::{CellRecord, Table};

/// Details about one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CellInfo<T> {
    /// The inspected cell.
    pub cell: CellRecord<T>,

    /// Exact integer value, when the stored value is integral.
    pub integer: Option<u64>,

    /// Whether the value is prime.
    pub is_prime: bool,

    /// `(n - 1, k - 1)` and `(n - 1, k)` for interior cells.
    pub parents: Option<(CellRecord<T>, CellRecord<T>)>,

    /// Column of the mirror cell, `n - k`.
    pub mirror_column: usize,
}

/// Inspect cell `(n, k)` of `table`.
pub fn inspect_cell<T: Float>(
    table: &Table<T>,
    n: usize,
    k: usize,
) -> Result<CellInfo<T>, PascalError> {
    let cell = table.cell(n, k).ok_or(PascalError::CellOutOfRange {
        row: n,
        column: k,
        rows: table.row_count(),
    })?;

    let integer = to_integer(cell.value);
    let parents = if k > 0 && k < n {
        table
            .cell(n - 1, k - 1)
            .zip(table.cell(n - 1, k))
    } else {
        None
    };

    Ok(CellInfo {
        cell,
        integer,
        is_prime: integer.is_some_and(is_prime),
        parents,
        mirror_column: n - k,
    })
}
