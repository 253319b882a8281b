//! Triangle result type.
//!
//! ## Purpose
//!
//! [`Triangle`] owns a generated table together with the bound it was
//! validated against, and exposes the query operations a renderer drives:
//! patterns, expansion terms, row sums, cell inspection and overlay plans.
//!
//! ## Design notes
//!
//! * **Immutable**: A triangle is never modified; a new row count means a new
//!   triangle.
//! * **Display**: Prints a summary followed by the centred rows.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::expansion::Expansion;
use crate::algorithms::patterns::{PatternKind, PatternSequence, extract_pattern};
use crate::engine::overlay::{CellPositionProvider, OverlayPlan, plan_overlays};
use crate::engine::validator::Validator;
use crate::engine::view::ViewState;
use crate::evaluation::identities::{RowSum, row_sums, verify_table};
use crate::evaluation::inspection::{CellInfo, inspect_cell};
use crate::math::binomial::to_integer;
use crate::primitives::bounds::RowCountBound;
use crate::primitives::errors::PascalError;
use crate::primitives::table::Table;

/// A generated Pascal's triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle<T> {
    table: Table<T>,
    bound: RowCountBound,
}

impl<T: Float> Triangle<T> {
    pub(crate) fn new(table: Table<T>, bound: RowCountBound) -> Self {
        Self { table, bound }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.table.row_count()
    }

    /// The coefficient table.
    #[inline]
    pub fn table(&self) -> &Table<T> {
        &self.table
    }

    /// The bound the row count was validated against.
    #[inline]
    pub fn bound(&self) -> RowCountBound {
        self.bound
    }

    /// Coefficient `C(n, k)` from the table.
    pub fn coefficient(&self, n: usize, k: usize) -> Result<T, PascalError> {
        Validator::validate_cell(n, k, self.rows())?;
        Ok(self.table.rows()[n][k])
    }

    /// Extract `kind` over every row.
    pub fn pattern(&self, kind: PatternKind) -> Result<PatternSequence<T>, PascalError> {
        extract_pattern(&self.table, kind, self.rows())
    }

    /// Extract `kind` over the first `row_count` rows.
    pub fn pattern_rows(
        &self,
        kind: PatternKind,
        row_count: usize,
    ) -> Result<PatternSequence<T>, PascalError> {
        extract_pattern(&self.table, kind, row_count)
    }

    /// Terms of `(a + b)^n`.
    pub fn expansion(&self, n: usize) -> Expansion<T> {
        Expansion::new(n)
    }

    /// Row sums with their expected powers of two.
    pub fn row_sums(&self) -> Vec<RowSum<T>> {
        row_sums(&self.table)
    }

    /// Inspect cell `(n, k)`.
    pub fn inspect(&self, n: usize, k: usize) -> Result<CellInfo<T>, PascalError> {
        inspect_cell(&self.table, n, k)
    }

    /// Check the structural identities of the table.
    pub fn verify(&self) -> Result<(), PascalError> {
        verify_table(&self.table)
    }

    /// Plan the overlays enabled in `view`.
    pub fn overlays<P>(&self, view: &ViewState, provider: &P) -> Result<OverlayPlan<T>, PascalError>
    where
        P: CellPositionProvider + ?Sized,
    {
        plan_overlays(&self.table, view, provider)
    }
}

fn format_value<T: Float>(value: T) -> String {
    match to_integer(value) {
        Some(v) => v.to_string(),
        None => format!("{}", value.to_f64().unwrap_or(f64::NAN)),
    }
}

impl<T: Float> Display for Triangle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Rows: {}", self.rows())?;
        writeln!(f, "  Bound: [{}, {}]", self.bound.min(), self.bound.max())?;
        writeln!(f)?;
        writeln!(f, "Triangle:")?;

        let lines: Vec<String> = self
            .table
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| format_value(v))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        let width = lines.iter().map(String::len).max().unwrap_or(0);

        for line in &lines {
            let pad = (width - line.len()) / 2;
            writeln!(f, "  {:pad$}{}", "", line, pad = pad)?;
        }
        Ok(())
    }
}
