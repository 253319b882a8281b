//! Input validation for triangle configuration and queries.
//!
//! ## Purpose
//!
//! This module provides validation functions for row counts, bounds and cell
//! coordinates. Pattern row ranges are checked by `extract_pattern` itself,
//! since it is callable without a triangle.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Additive**: Valid inputs pass through unchanged.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or correct invalid inputs.

// Internal dependencies
use crate::primitives::bounds::RowCountBound;
use crate::primitives::errors::PascalError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for triangle configuration and queries.
///
/// All methods return `Result<(), PascalError>` and fail fast.
#[derive(Debug)]
pub struct Validator;

impl Validator {
    /// Validate a `[min, max]` row count bound.
    pub fn validate_bounds(min: usize, max: usize) -> Result<RowCountBound, PascalError> {
        RowCountBound::new(min, max)
    }

    /// Validate a requested row count against `bound`.
    pub fn validate_row_count(rows: usize, bound: &RowCountBound) -> Result<(), PascalError> {
        if !bound.contains(rows) {
            return Err(PascalError::InvalidRowCount {
                got: rows,
                min: bound.min(),
                max: bound.max(),
            });
        }
        Ok(())
    }

    /// Validate that `(row, column)` lies inside a table of `rows` rows.
    pub fn validate_cell(row: usize, column: usize, rows: usize) -> Result<(), PascalError> {
        if row >= rows || column > row {
            return Err(PascalError::CellOutOfRange { row, column, rows });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), PascalError> {
        if let Some(param) = duplicate_param {
            return Err(PascalError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
