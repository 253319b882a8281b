//! Execution engine for triangle construction.
//!
//! ## Purpose
//!
//! This module validates a [`TriangleConfig`], generates the coefficient
//! table and optionally verifies it before handing back a [`Triangle`].
//!
//! ## Design notes
//!
//! * **Stateless**: Every run regenerates the table from scratch.
//! * **Fail-Fast**: Configuration errors surface before any computation.
//!
//! ## Non-goals
//!
//! * This module does not cache tables between runs.

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::generator::generate_table;
use crate::engine::output::Triangle;
use crate::engine::validator::Validator;
use crate::evaluation::identities::verify_table;
use crate::primitives::bounds::{DEFAULT_ROWS, RowCountBound};
use crate::primitives::errors::PascalError;

/// Resolved configuration for one triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleConfig {
    /// Number of rows to generate.
    pub rows: usize,

    /// Accepted row count range.
    pub bound: RowCountBound,

    /// Run identity checks on the generated table.
    pub verify: bool,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            bound: RowCountBound::default(),
            verify: false,
        }
    }
}

/// Runs a [`TriangleConfig`].
#[derive(Debug)]
pub struct TriangleExecutor;

impl TriangleExecutor {
    /// Validate `config` and build the triangle it describes.
    pub fn run<T: Float>(config: &TriangleConfig) -> Result<Triangle<T>, PascalError> {
        Validator::validate_row_count(config.rows, &config.bound)?;

        debug!(rows = config.rows, "generating coefficient table");
        let table = generate_table::<T>(config.rows);

        if config.verify {
            verify_table(&table)?;
            debug!(rows = config.rows, "table identities verified");
        }

        Ok(Triangle::new(table, config.bound))
    }
}
