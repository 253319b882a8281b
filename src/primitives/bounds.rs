//! Row count bounds.
//!
//! ## Purpose
//!
//! This module defines [`RowCountBound`], the inclusive range of row counts a
//! triangle may be built with. The default range `[1, 30]` keeps every
//! coefficient well inside the exactly representable range of `f64`.
//!
//! ## Invariants
//!
//! * `1 <= min <= max` for every bound produced by [`RowCountBound::new`].

#[cfg(feature = "serde")]
use serde::Serialize;

// Internal dependencies
use crate::primitives::errors::PascalError;

/// Smallest row count accepted by default.
pub const DEFAULT_MIN_ROWS: usize = 1;

/// Largest row count accepted by default.
pub const DEFAULT_MAX_ROWS: usize = 30;

/// Row count used when none is configured.
pub const DEFAULT_ROWS: usize = 10;

/// Inclusive range of accepted row counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RowCountBound {
    min: usize,
    max: usize,
}

impl Default for RowCountBound {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ROWS,
            max: DEFAULT_MAX_ROWS,
        }
    }
}

impl RowCountBound {
    /// Create a bound, rejecting empty ranges and a zero minimum.
    pub fn new(min: usize, max: usize) -> Result<Self, PascalError> {
        if min == 0 || min > max {
            return Err(PascalError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest accepted row count.
    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest accepted row count.
    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether `rows` lies inside the bound.
    #[inline]
    pub fn contains(&self, rows: usize) -> bool {
        (self.min..=self.max).contains(&rows)
    }

    /// Clamp `rows` into the bound.
    #[inline]
    pub fn clamp(&self, rows: usize) -> usize {
        rows.clamp(self.min, self.max)
    }
}
