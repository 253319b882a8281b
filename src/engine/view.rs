//! Immutable view state.
//!
//! ## Purpose
//!
//! Captures which annotations a renderer should draw. Each toggle returns a
//! new value; the state is passed explicitly to the overlay planner instead
//! of living in shared mutable flags.
//!
//! ## Invariants
//!
//! * At most one pattern is active at a time.

#[cfg(feature = "serde")]
use serde::Serialize;

// Internal dependencies
use crate::algorithms::patterns::PatternKind;

/// Annotation toggles for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ViewState {
    /// Draw parent-to-child connector lines.
    pub connectors: bool,

    /// Draw the vertical symmetry axis.
    pub symmetry_axis: bool,

    /// Label each row with its sum.
    pub row_sums: bool,

    /// Highlight cells whose value is prime.
    pub highlight_primes: bool,

    /// Active pattern family, if any.
    pub pattern: Option<PatternKind>,
}

impl ViewState {
    /// All annotations off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip connector lines.
    pub fn toggle_connectors(self) -> Self {
        Self {
            connectors: !self.connectors,
            ..self
        }
    }

    /// Flip the symmetry axis.
    pub fn toggle_symmetry_axis(self) -> Self {
        Self {
            symmetry_axis: !self.symmetry_axis,
            ..self
        }
    }

    /// Flip row sum labels.
    pub fn toggle_row_sums(self) -> Self {
        Self {
            row_sums: !self.row_sums,
            ..self
        }
    }

    /// Flip prime highlighting.
    pub fn toggle_primes(self) -> Self {
        Self {
            highlight_primes: !self.highlight_primes,
            ..self
        }
    }

    /// Select `kind`, or clear it when it is already active.
    pub fn toggle_pattern(self, kind: PatternKind) -> Self {
        let pattern = if self.pattern == Some(kind) {
            None
        } else {
            Some(kind)
        };
        Self { pattern, ..self }
    }

    /// Replace the active pattern.
    pub fn with_pattern(self, pattern: Option<PatternKind>) -> Self {
        Self { pattern, ..self }
    }
}
