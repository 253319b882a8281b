//! Coefficient table and cell records.
//!
//! ## Purpose
//!
//! This module defines the [`Table`] of binomial coefficients and the
//! [`CellRecord`] triple used to hand individual cells to callers.
//!
//! ## Design notes
//!
//! * **Row-major**: Rows are stored in order; row `n` holds `n + 1` values.
//! * **Immutable**: A table is built once and never mutated afterwards.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `rows[n].len() == n + 1` for every row.
//!
//! ## Non-goals
//!
//! * This module does not compute coefficients (see `algorithms::generator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::Serialize;

/// One cell of the triangle: `(row, column, value)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CellRecord<T> {
    /// Row index `n`.
    pub row: usize,

    /// Column index `k`, `0 <= k <= n`.
    pub column: usize,

    /// Coefficient `C(n, k)`.
    pub value: T,
}

/// Ordered rows of binomial coefficients.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Table<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Float> Table<T> {
    /// Wrap pre-computed rows.
    pub(crate) fn from_rows(rows: Vec<Vec<T>>) -> Self {
        debug_assert!(rows.iter().enumerate().all(|(n, row)| row.len() == n + 1));
        Self { rows }
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in order.
    #[inline]
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Row `n`, if present.
    #[inline]
    pub fn row(&self, n: usize) -> Option<&[T]> {
        self.rows.get(n).map(Vec::as_slice)
    }

    /// Value at `(n, k)`, if present.
    #[inline]
    pub fn get(&self, n: usize, k: usize) -> Option<T> {
        self.rows.get(n).and_then(|row| row.get(k)).copied()
    }

    /// Cell record at `(n, k)`, if present.
    pub fn cell(&self, n: usize, k: usize) -> Option<CellRecord<T>> {
        self.get(n, k).map(|value| CellRecord {
            row: n,
            column: k,
            value,
        })
    }

    /// Iterate over every cell in row order, then column order.
    pub fn cells(&self) -> impl Iterator<Item = CellRecord<T>> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, values)| {
            values.iter().enumerate().map(move |(column, &value)| CellRecord {
                row,
                column,
                value,
            })
        })
    }

    /// Sum of row `n`, if present.
    pub fn row_sum(&self, n: usize) -> Option<T> {
        self.rows
            .get(n)
            .map(|row| row.iter().fold(T::zero(), |acc, &v| acc + v))
    }

    /// Width of the widest row (the last one).
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.last().map_or(0, Vec::len)
    }
}
