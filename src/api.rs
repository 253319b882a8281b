//! High-level API for building Pascal's triangles.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the row count and its bound, and
//! re-exports the free functions of the computation core.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PascalBuilder`] via `Pascal::new()`.
//! 2. Chain configuration methods (`.rows()`, `.bounds()`, `.verify()`).
//! 3. Call `.build()` to get a [`Triangle`].

// External dependencies
use core::fmt::Debug;
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{TriangleConfig, TriangleExecutor};
use crate::engine::validator::Validator;
use crate::primitives::bounds::{DEFAULT_MAX_ROWS, DEFAULT_MIN_ROWS, DEFAULT_ROWS};

// Publicly re-exported types
pub use crate::algorithms::expansion::{Expansion, ExpansionTerm, expansion_terms};
pub use crate::algorithms::generator::generate_table;
pub use crate::algorithms::patterns::{
    PatternGroup, PatternKind, PatternSequence, extract_pattern,
};
pub use crate::engine::output::Triangle;
pub use crate::engine::overlay::{
    CellPositionProvider, GridLayout, HighlightKind, Overlay, OverlayPlan, Point, SegmentKind,
    plan_overlays,
};
pub use crate::engine::view::ViewState;
pub use crate::evaluation::identities::{RowSum, row_sums, verify_table};
pub use crate::evaluation::inspection::{CellInfo, inspect_cell};
pub use crate::math::binomial::{coefficient, to_integer};
pub use crate::math::primes::is_prime;
pub use crate::primitives::bounds::RowCountBound;
pub use crate::primitives::errors::PascalError;
pub use crate::primitives::table::{CellRecord, Table};

/// Fluent builder for configuring a triangle.
#[derive(Debug, Clone)]
pub struct PascalBuilder<T: Float + Debug> {
    /// Number of rows to generate.
    pub rows: Option<usize>,

    /// Smallest accepted row count.
    pub min_rows: Option<usize>,

    /// Largest accepted row count.
    pub max_rows: Option<usize>,

    /// Run identity checks after generation.
    pub verify: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float + Debug> Default for PascalBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> PascalBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            rows: None,
            min_rows: None,
            max_rows: None,
            verify: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the number of rows.
    pub fn rows(mut self, rows: usize) -> Self {
        if self.rows.is_some() {
            self.duplicate_param = Some("rows");
        }
        self.rows = Some(rows);
        self
    }

    /// Set the inclusive row count bound (default `[1, 30]`).
    pub fn bounds(mut self, min: usize, max: usize) -> Self {
        if self.min_rows.is_some() || self.max_rows.is_some() {
            self.duplicate_param = Some("bounds");
        }
        self.min_rows = Some(min);
        self.max_rows = Some(max);
        self
    }

    /// Verify edges, symmetry and the additive recurrence after generation.
    pub fn verify(mut self) -> Self {
        if self.verify.is_some() {
            self.duplicate_param = Some("verify");
        }
        self.verify = Some(true);
        self
    }

    /// Validate the configuration and build the triangle.
    pub fn build(self) -> Result<Triangle<T>, PascalError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let bound = Validator::validate_bounds(
            self.min_rows.unwrap_or(DEFAULT_MIN_ROWS),
            self.max_rows.unwrap_or(DEFAULT_MAX_ROWS),
        )?;

        let config = TriangleConfig {
            rows: self.rows.unwrap_or(DEFAULT_ROWS),
            bound,
            verify: self.verify.unwrap_or(false),
        };

        TriangleExecutor::run(&config)
    }
}
