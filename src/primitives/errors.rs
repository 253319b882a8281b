//! Error types for triangle construction and queries.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate. The numeric core itself is total; errors only
//! arise from the defensive validation layered on top of it.
//!
//! ## Design notes
//!
//! * **Hand-written Display**: Messages are stable and tested verbatim.
//! * **no_std**: `std::error::Error` is implemented only with the `std` feature.
//! * **Cloneable**: Errors are plain data and can be compared in tests.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Error type for all fallible Pascal triangle operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PascalError {
    /// Row count outside the configured bound.
    InvalidRowCount {
        /// Requested row count.
        got: usize,
        /// Smallest accepted row count.
        min: usize,
        /// Largest accepted row count.
        max: usize,
    },

    /// Row count bound with `min > max` or `min == 0`.
    InvalidBounds {
        /// Lower end of the bound.
        min: usize,
        /// Upper end of the bound.
        max: usize,
    },

    /// Cell `(row, column)` is not part of the table.
    CellOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Number of rows in the table.
        rows: usize,
    },

    /// Pattern requested for more rows than the table holds.
    RowCountExceedsTable {
        /// Requested row count.
        requested: usize,
        /// Rows actually present.
        available: usize,
    },

    /// A structural identity of the triangle does not hold.
    IdentityViolation(String),

    /// Builder parameter set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for PascalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRowCount { got, min, max } => {
                write!(f, "Invalid row count: {} (must be in [{}, {}])", got, min, max)
            }
            Self::InvalidBounds { min, max } => {
                write!(
                    f,
                    "Invalid row count bound: [{}, {}] (min must be at least 1 and not exceed max)",
                    min, max
                )
            }
            Self::CellOutOfRange { row, column, rows } => {
                write!(
                    f,
                    "Cell ({}, {}) is outside a table of {} rows",
                    row, column, rows
                )
            }
            Self::RowCountExceedsTable {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Requested {} rows but the table only has {}",
                    requested, available
                )
            }
            Self::IdentityViolation(msg) => write!(f, "Identity violation: {}", msg),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PascalError {}
