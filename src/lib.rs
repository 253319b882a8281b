//! # Pascal: Binomial Coefficient Tables and Triangle Patterns for Rust
//!
//! The computation core behind an interactive Pascal's triangle: coefficient
//! tables, the integer sequences hidden in them, primality classification,
//! binomial expansion terms, and renderer-independent overlay planning.
//!
//! ## What is in the triangle?
//!
//! Row `n` of Pascal's triangle lists the binomial coefficients `C(n, k)`,
//! the number of ways to choose `k` items out of `n`. Beyond that, the
//! triangle hides several classic sequences:
//!
//! - **Diagonal sums**: Summing the shallow diagonals (`n + k` constant)
//!   produces a Fibonacci-like sequence.
//! - **Natural numbers**: Column 1, `C(n, 1) = n`.
//! - **Triangular numbers**: Column 2, `C(n, 2) = n(n - 1) / 2`.
//! - **Tetrahedral numbers**: Column 3, `C(n, 3) = n(n - 1)(n - 2) / 6`.
//!
//! ## Quick Start
//!
//! ```rust
//! use pascal_rs::prelude::*;
//!
//! // Build the first five rows
//! let triangle = Pascal::<f64>::new()
//!     .rows(5)      // Rows 0..=4
//!     .verify()     // Check symmetry and the additive recurrence
//!     .build()?;
//!
//! assert_eq!(triangle.table().row(4), Some(&[1.0, 4.0, 6.0, 4.0, 1.0][..]));
//!
//! println!("{}", triangle);
//! # Result::<(), PascalError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Rows: 5
//!   Bound: [1, 30]
//!
//! Triangle:
//!       1
//!      1 1
//!     1 2 1
//!    1 3 3 1
//!   1 4 6 4 1
//! ```
//!
//! ## Patterns
//!
//! ```rust
//! use pascal_rs::prelude::*;
//!
//! let triangle = Pascal::<f64>::new().rows(8).build()?;
//!
//! let triangular = triangle.pattern(Triangular)?;
//! assert_eq!(triangular.terms(), vec![1.0, 3.0, 6.0, 10.0, 15.0, 21.0]);
//!
//! let diagonals = triangle.pattern(DiagonalSum)?;
//! assert_eq!(diagonals.terms(), vec![1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0]);
//! # Result::<(), PascalError>::Ok(())
//! ```
//!
//! ## Binomial Expansion
//!
//! ```rust
//! use pascal_rs::prelude::*;
//!
//! let expansion = Expansion::<f64>::new(3);
//! assert_eq!(expansion.to_string(), "(a + b)^3 = a^3 + 3a^2b + 3ab^2 + b^3");
//! ```
//!
//! ## Overlays
//!
//! Drawing is left to the caller. A renderer supplies cell positions through
//! [`CellPositionProvider`](prelude::CellPositionProvider) and receives a flat
//! list of segments, highlights and labels for the current
//! [`ViewState`](prelude::ViewState):
//!
//! ```rust
//! use pascal_rs::prelude::*;
//!
//! let triangle = Pascal::<f64>::new().rows(4).build()?;
//! let view = ViewState::new().toggle_connectors().toggle_symmetry_axis();
//! let layout = GridLayout::new(4, 40.0, 30.0);
//!
//! let plan = triangle.overlays(&view, &layout)?;
//! assert_eq!(plan.segment_count(SegmentKind::Connector), 12);
//! assert_eq!(plan.segment_count(SegmentKind::SymmetryAxis), 1);
//! # Result::<(), PascalError>::Ok(())
//! ```
//!
//! ## Numeric Notes
//!
//! Coefficients are computed independently with the running product
//! `Π (n - i + 1) / i`, generic over `Float`. With `f64` every coefficient up
//! to the default maximum of 30 rows is exact; use
//! [`to_integer`](prelude::to_integer) to recover the integer value.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! pascal_rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures.
//
// Contains the coefficient `Table`, `CellRecord`, `RowCountBound`
// and the `PascalError` type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the multiplicative binomial coefficient and primality testing.
mod math;

// Layer 3: Algorithms - the combinatorial core.
//
// Contains table generation, pattern extraction and expansion terms.
mod algorithms;

// Layer 4: Evaluation - checks and derived facts.
//
// Contains identity verification, row sums and cell inspection.
mod evaluation;

// Layer 5: Engine - orchestration.
//
// Contains validation, triangle construction, view state and overlay planning.
mod engine;

// High-level fluent API.
//
// Provides the `Pascal` builder and re-exports the free functions.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use pascal_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CellInfo, CellPositionProvider, CellRecord, Expansion, ExpansionTerm, GridLayout,
        HighlightKind, Overlay, OverlayPlan, PascalBuilder as Pascal, PascalError, PatternGroup,
        PatternKind,
        PatternKind::{DiagonalSum, Natural, Tetrahedral, Triangular},
        PatternSequence, Point, RowCountBound, RowSum, SegmentKind, Table, Triangle, ViewState,
        coefficient, expansion_terms, extract_pattern, generate_table, inspect_cell, is_prime,
        plan_overlays, row_sums, to_integer, verify_table,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
