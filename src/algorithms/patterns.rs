//! Pattern extraction over a coefficient table.
//!
//! ## Purpose
//!
//! This module extracts the cells that make up four named integer sequences
//! hidden in Pascal's triangle, so a renderer can highlight and annotate them.
//!
//! ## Key concepts
//!
//! * **Diagonal sums**: For each `m`, the cells `(m - i, i)` that exist in the
//!   triangle. Their totals grow like the Fibonacci sequence.
//! * **Fixed columns**: Column 1 holds the natural numbers, column 2 the
//!   triangular numbers and column 3 the tetrahedral numbers.
//!
//! ## Design notes
//!
//! * **Uniform output**: Every family returns [`PatternGroup`]s. A diagonal is
//!   one group of several cells; a column entry is a group of one cell.
//! * **Running totals**: Each group carries its sequence term and the running
//!   total of terms up to and including it.
//!
//! ## Invariants
//!
//! * Groups are ordered by increasing diagonal index or row.
//! * Within a diagonal, cells are ordered by increasing column.
//! * A range with no rows yields an empty sequence, never an error.
//!
//! ## Non-goals
//!
//! * Diagonal totals are reported as computed; they are not checked against
//!   a reference Fibonacci table.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::Serialize;

// Internal dependencies
use crate::primitives::errors::PascalError;
use crate::primitives::table::{CellRecord, Table};

// ============================================================================
// Pattern Kind
// ============================================================================

/// The named sequences that can be extracted from a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PatternKind {
    /// Shallow diagonal sums (`n + k` constant).
    #[default]
    DiagonalSum,

    /// Column 1: `1, 2, 3, ...`.
    Natural,

    /// Column 2: `1, 3, 6, 10, ...`.
    Triangular,

    /// Column 3: `1, 4, 10, 20, ...`.
    Tetrahedral,
}

impl PatternKind {
    /// Every pattern, in display order.
    pub const ALL: [PatternKind; 4] = [
        PatternKind::DiagonalSum,
        PatternKind::Natural,
        PatternKind::Triangular,
        PatternKind::Tetrahedral,
    ];

    /// Fixed column of the family, `None` for diagonal sums.
    #[inline]
    pub fn column(self) -> Option<usize> {
        match self {
            Self::DiagonalSum => None,
            Self::Natural => Some(1),
            Self::Triangular => Some(2),
            Self::Tetrahedral => Some(3),
        }
    }

    /// First row that contributes to the family.
    #[inline]
    pub fn first_row(self) -> usize {
        self.column().unwrap_or(0)
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::DiagonalSum => "Diagonal sums",
            Self::Natural => "Natural numbers",
            Self::Triangular => "Triangular numbers",
            Self::Tetrahedral => "Tetrahedral numbers",
        }
    }

    /// Closed-form value of the column family at `row`.
    ///
    /// `n`, `n(n-1)/2` and `n(n-1)(n-2)/6` for the natural, triangular and
    /// tetrahedral columns, with `n` the row index. `None` for diagonal sums
    /// and rows below the family's first row.
    pub fn closed_form(self, row: usize) -> Option<u64> {
        if row < self.first_row() {
            return None;
        }
        let n = row as u64;
        match self {
            Self::DiagonalSum => None,
            Self::Natural => Some(n),
            Self::Triangular => Some(n * (n - 1) / 2),
            Self::Tetrahedral => Some(n * (n - 1) * (n - 2) / 6),
        }
    }
}

// ============================================================================
// Pattern Output
// ============================================================================

/// One term of a pattern sequence and the cells that produce it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PatternGroup<T> {
    /// Cells contributing to this term, in column order.
    pub cells: Vec<CellRecord<T>>,

    /// The sequence term (sum of `cells`).
    pub term: T,

    /// Sum of this term and every earlier one.
    pub running_total: T,
}

/// Ordered terms of one pattern family.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PatternSequence<T> {
    /// Family the sequence belongs to.
    pub kind: PatternKind,

    /// Terms in increasing order.
    pub groups: Vec<PatternGroup<T>>,
}

impl<T: Float> PatternSequence<T> {
    /// Number of terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the sequence has no terms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every contributing cell, in order.
    pub fn cells(&self) -> impl Iterator<Item = &CellRecord<T>> + '_ {
        self.groups.iter().flat_map(|g| g.cells.iter())
    }

    /// Sequence terms.
    pub fn terms(&self) -> Vec<T> {
        self.groups.iter().map(|g| g.term).collect()
    }

    /// Running totals of the sequence terms.
    pub fn running_totals(&self) -> Vec<T> {
        self.groups.iter().map(|g| g.running_total).collect()
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract `kind` from the first `row_count` rows of `table`.
pub fn extract_pattern<T: Float>(
    table: &Table<T>,
    kind: PatternKind,
    row_count: usize,
) -> Result<PatternSequence<T>, PascalError> {
    if row_count > table.row_count() {
        return Err(PascalError::RowCountExceedsTable {
            requested: row_count,
            available: table.row_count(),
        });
    }

    let groups: Vec<Vec<CellRecord<T>>> = match kind.column() {
        None => (0..row_count).map(|m| diagonal_cells(table, m)).collect(),
        Some(column) => (kind.first_row()..row_count)
            .filter_map(|n| table.cell(n, column))
            .map(|cell| vec![cell])
            .collect(),
    };

    let mut running_total = T::zero();
    let groups = groups
        .into_iter()
        .map(|cells| {
            let term = cells.iter().fold(T::zero(), |acc, c| acc + c.value);
            running_total = running_total + term;
            PatternGroup {
                cells,
                term,
                running_total,
            }
        })
        .collect();

    Ok(PatternSequence { kind, groups })
}

/// Cells `(m - i, i)` for `i = 0..=m` that lie inside the triangle.
fn diagonal_cells<T: Float>(table: &Table<T>, m: usize) -> Vec<CellRecord<T>> {
    (0..=m)
        .filter(|&i| i <= m - i)
        .filter_map(|i| table.cell(m - i, i))
        .collect()
}
