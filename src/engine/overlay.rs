//! Overlay planning against renderer-supplied geometry.
//!
//! ## Purpose
//!
//! Turns a table and a [`ViewState`] into a flat list of drawing primitives
//! (segments, highlights, labels). Geometry comes from a
//! [`CellPositionProvider`], so the planner never depends on a display
//! surface; a DOM renderer backs it with element bounding boxes, while
//! [`GridLayout`] computes an idealized layout.
//!
//! ## Key concepts
//!
//! * **Connectors**: Each cell links to the one or two cells it is summed into.
//! * **Symmetry axis**: A vertical line from the apex down to the last row.
//! * **Pattern path**: Consecutive cells of the active pattern are joined.
//!
//! ## Invariants
//!
//! * Cells the provider cannot place are skipped, never an error.
//! * Overlays are emitted in a fixed order: connectors, axis, pattern,
//!   primes, row sums.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::patterns::{PatternKind, extract_pattern};
use crate::engine::view::ViewState;
use crate::evaluation::identities::row_sums;
use crate::math::binomial::to_integer;
use crate::math::primes::is_prime;
use crate::primitives::errors::PascalError;
use crate::primitives::table::{CellRecord, Table};

// ============================================================================
// Geometry
// ============================================================================

/// A point in renderer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,

    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Source of cell centres supplied by the renderer.
pub trait CellPositionProvider {
    /// Centre of cell `(row, column)`, or `None` if it is not laid out.
    fn center(&self, row: usize, column: usize) -> Option<Point>;
}

impl<F> CellPositionProvider for F
where
    F: Fn(usize, usize) -> Option<Point>,
{
    fn center(&self, row: usize, column: usize) -> Option<Point> {
        self(row, column)
    }
}

/// Idealized centred layout: rows stacked downwards, cells spaced evenly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GridLayout {
    /// Number of rows laid out.
    pub rows: usize,

    /// Horizontal distance between neighbouring cells.
    pub cell_width: f64,

    /// Vertical distance between rows.
    pub row_height: f64,
}

impl GridLayout {
    /// Layout for `rows` rows with the given spacing.
    pub fn new(rows: usize, cell_width: f64, row_height: f64) -> Self {
        Self {
            rows,
            cell_width,
            row_height,
        }
    }
}

impl CellPositionProvider for GridLayout {
    fn center(&self, row: usize, column: usize) -> Option<Point> {
        if row >= self.rows || column > row {
            return None;
        }
        // Apex sits at x = 0; each row is offset half a cell per level.
        let x = (column as f64 - row as f64 / 2.0) * self.cell_width;
        let y = (row as f64 + 0.5) * self.row_height;
        Some(Point::new(x, y))
    }
}

// ============================================================================
// Overlays
// ============================================================================

/// What a segment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SegmentKind {
    /// Parent to child link.
    Connector,

    /// Vertical axis of symmetry.
    SymmetryAxis,

    /// Link between consecutive cells of the active pattern.
    PatternPath,
}

/// Why a cell is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum HighlightKind {
    /// Member of the active pattern.
    Pattern(PatternKind),

    /// Prime value.
    Prime,
}

/// A single drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Overlay<T> {
    /// Straight line.
    Segment {
        /// Meaning of the line.
        kind: SegmentKind,
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },

    /// Emphasized cell.
    Highlight {
        /// Reason for the highlight.
        kind: HighlightKind,
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        column: usize,
    },

    /// Term label for the active pattern, anchored at its last cell.
    PatternTerm {
        /// Index of the term in the sequence.
        index: usize,
        /// Term value.
        term: T,
        /// Running total up to this term.
        running_total: T,
        /// Anchor point.
        anchor: Point,
    },

    /// Row sum label, anchored at the row's last cell.
    RowSum {
        /// Row index.
        row: usize,
        /// Sum of the row.
        sum: T,
        /// Anchor point.
        anchor: Point,
    },
}

/// Ordered overlays for one render.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OverlayPlan<T> {
    /// Overlays in drawing order.
    pub overlays: Vec<Overlay<T>>,
}

impl<T> OverlayPlan<T> {
    /// Number of segments of `kind`.
    pub fn segment_count(&self, kind: SegmentKind) -> usize {
        self.overlays
            .iter()
            .filter(|o| matches!(o, Overlay::Segment { kind: k, .. } if *k == kind))
            .count()
    }

    /// Number of highlights, of any kind.
    pub fn highlight_count(&self) -> usize {
        self.overlays
            .iter()
            .filter(|o| matches!(o, Overlay::Highlight { .. }))
            .count()
    }
}

/// Plan every overlay enabled in `view`.
pub fn plan_overlays<T, P>(
    table: &Table<T>,
    view: &ViewState,
    provider: &P,
) -> Result<OverlayPlan<T>, PascalError>
where
    T: Float,
    P: CellPositionProvider + ?Sized,
{
    let mut overlays = Vec::new();

    if view.connectors {
        plan_connectors(table, provider, &mut overlays);
    }
    if view.symmetry_axis {
        plan_symmetry_axis(table, provider, &mut overlays);
    }
    if let Some(kind) = view.pattern {
        plan_pattern(table, kind, provider, &mut overlays)?;
    }
    if view.highlight_primes {
        overlays.extend(
            table
                .cells()
                .filter(|c| to_integer(c.value).is_some_and(is_prime))
                .map(|c| Overlay::Highlight {
                    kind: HighlightKind::Prime,
                    row: c.row,
                    column: c.column,
                }),
        );
    }
    if view.row_sums {
        overlays.extend(row_sums(table).into_iter().filter_map(|rs| {
            provider.center(rs.row, rs.row).map(|anchor| Overlay::RowSum {
                row: rs.row,
                sum: rs.sum,
                anchor,
            })
        }));
    }

    debug!(
        rows = table.row_count(),
        overlays = overlays.len(),
        "planned overlays"
    );
    Ok(OverlayPlan { overlays })
}

fn segment<T, P>(
    provider: &P,
    kind: SegmentKind,
    from: (usize, usize),
    to: (usize, usize),
) -> Option<Overlay<T>>
where
    P: CellPositionProvider + ?Sized,
{
    match (provider.center(from.0, from.1), provider.center(to.0, to.1)) {
        (Some(from), Some(to)) => Some(Overlay::Segment { kind, from, to }),
        _ => {
            trace!(?from, ?to, "skipping segment with unplaced endpoint");
            None
        }
    }
}

fn plan_connectors<T, P>(table: &Table<T>, provider: &P, out: &mut Vec<Overlay<T>>)
where
    T: Float,
    P: CellPositionProvider + ?Sized,
{
    for n in 1..table.row_count() {
        for k in 0..=n {
            if k > 0 {
                out.extend(segment(provider, SegmentKind::Connector, (n - 1, k - 1), (n, k)));
            }
            if k < n {
                out.extend(segment(provider, SegmentKind::Connector, (n - 1, k), (n, k)));
            }
        }
    }
}

fn plan_symmetry_axis<T, P>(table: &Table<T>, provider: &P, out: &mut Vec<Overlay<T>>)
where
    T: Float,
    P: CellPositionProvider + ?Sized,
{
    let Some(last) = table.row_count().checked_sub(1) else {
        return;
    };
    let apex = provider.center(0, 0);
    let bottom = provider.center(last, 0);
    if let (Some(from), Some(bottom)) = (apex, bottom) {
        out.push(Overlay::Segment {
            kind: SegmentKind::SymmetryAxis,
            from,
            to: Point::new(from.x, bottom.y),
        });
    }
}

fn plan_pattern<T, P>(
    table: &Table<T>,
    kind: PatternKind,
    provider: &P,
    out: &mut Vec<Overlay<T>>,
) -> Result<(), PascalError>
where
    T: Float,
    P: CellPositionProvider + ?Sized,
{
    let sequence = extract_pattern(table, kind, table.row_count())?;

    out.extend(sequence.cells().map(|c| Overlay::Highlight {
        kind: HighlightKind::Pattern(kind),
        row: c.row,
        column: c.column,
    }));

    // Diagonals are drawn one path per group; a column is one continuous path.
    let paths: Vec<Vec<&CellRecord<T>>> = if kind.column().is_some() {
        vec![sequence.cells().collect()]
    } else {
        sequence.groups.iter().map(|g| g.cells.iter().collect()).collect()
    };
    for path in &paths {
        for pair in path.windows(2) {
            out.extend(segment(
                provider,
                SegmentKind::PatternPath,
                (pair[0].row, pair[0].column),
                (pair[1].row, pair[1].column),
            ));
        }
    }

    for (index, group) in sequence.groups.iter().enumerate() {
        let anchor = group
            .cells
            .last()
            .and_then(|c| provider.center(c.row, c.column));
        if let Some(anchor) = anchor {
            out.push(Overlay::PatternTerm {
                index,
                term: group.term,
                running_total: group.running_total,
                anchor,
            });
        }
    }

    Ok(())
}
