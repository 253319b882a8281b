//! Tests for the fluent builder and the `Triangle` result.
//!
//! ## Test Organization
//!
//! 1. **Defaults** - Unconfigured builds
//! 2. **Validation** - Row counts, bounds, duplicates
//! 3. **Queries** - Facade methods on `Triangle`
//! 4. **Display** - Summary and centred rows

use pascal_rs::prelude::*;

// ============================================================================
// Defaults
// ============================================================================

/// Test the default configuration.
#[test]
fn test_default_build() {
    let triangle = Pascal::<f64>::new().build().unwrap();
    assert_eq!(triangle.rows(), 10);
    assert_eq!(triangle.bound(), RowCountBound::default());
    assert_eq!(triangle.bound().min(), 1);
    assert_eq!(triangle.bound().max(), 30);
}

/// Test the boundary row counts.
#[test]
fn test_bound_edges() {
    assert_eq!(Pascal::<f64>::new().rows(1).build().unwrap().rows(), 1);
    assert_eq!(Pascal::<f64>::new().rows(30).build().unwrap().rows(), 30);
}

// ============================================================================
// Validation
// ============================================================================

/// Test rejection of row counts outside the default bound.
#[test]
fn test_invalid_row_counts() {
    for rows in [0, 31, 100] {
        let err = Pascal::<f64>::new().rows(rows).build().unwrap_err();
        assert_eq!(
            err,
            PascalError::InvalidRowCount {
                got: rows,
                min: 1,
                max: 30
            }
        );
    }
}

/// Test custom bounds.
#[test]
fn test_custom_bounds() {
    let triangle = Pascal::<f64>::new().rows(3).bounds(2, 5).build().unwrap();
    assert_eq!(triangle.bound().max(), 5);

    assert!(Pascal::<f64>::new().rows(6).bounds(2, 5).build().is_err());
    assert_eq!(
        Pascal::<f64>::new().rows(3).bounds(5, 2).build().unwrap_err(),
        PascalError::InvalidBounds { min: 5, max: 2 }
    );
    assert!(Pascal::<f64>::new().bounds(0, 5).build().is_err());
}

/// Test duplicate parameter detection.
#[test]
fn test_duplicate_parameters() {
    let err = Pascal::<f64>::new().rows(3).rows(4).build().unwrap_err();
    assert_eq!(err, PascalError::DuplicateParameter { parameter: "rows" });

    let err = Pascal::<f64>::new().verify().verify().build().unwrap_err();
    assert_eq!(err, PascalError::DuplicateParameter { parameter: "verify" });
}

/// Test row count bound helpers.
#[test]
fn test_row_count_bound() {
    let bound = RowCountBound::new(3, 7).unwrap();
    assert!(bound.contains(3));
    assert!(bound.contains(7));
    assert!(!bound.contains(8));
    assert_eq!(bound.clamp(1), 3);
    assert_eq!(bound.clamp(40), 7);
}

// ============================================================================
// Queries
// ============================================================================

/// Test the query facade on a verified triangle.
#[test]
fn test_triangle_queries() {
    let triangle = Pascal::<f64>::new().rows(6).verify().build().unwrap();

    assert_eq!(triangle.coefficient(5, 2), Ok(10.0));
    assert_eq!(
        triangle.coefficient(6, 0),
        Err(PascalError::CellOutOfRange {
            row: 6,
            column: 0,
            rows: 6
        })
    );
    assert_eq!(
        triangle.coefficient(3, 4),
        Err(PascalError::CellOutOfRange {
            row: 3,
            column: 4,
            rows: 6
        })
    );

    assert_eq!(triangle.pattern(Natural).unwrap().terms(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(triangle.pattern_rows(Natural, 3).unwrap().terms(), vec![1.0, 2.0]);
    assert_eq!(
        triangle.pattern_rows(Natural, 7),
        Err(PascalError::RowCountExceedsTable {
            requested: 7,
            available: 6
        })
    );

    assert_eq!(triangle.expansion(2).terms.len(), 3);
    assert_eq!(triangle.row_sums().last().map(|rs| rs.sum), Some(32.0));
    assert_eq!(triangle.inspect(5, 1).unwrap().integer, Some(5));
    assert!(triangle.verify().is_ok());
}

/// Test a single-precision triangle.
#[test]
fn test_f32_triangle() {
    let triangle = Pascal::<f32>::new().rows(12).verify().build().unwrap();
    assert_eq!(triangle.coefficient(11, 5), Ok(462.0_f32));
}

// ============================================================================
// Display
// ============================================================================

/// Test the printed summary and centred rows.
#[test]
fn test_display() {
    let triangle = Pascal::<f64>::new().rows(4).build().unwrap();
    let expected = "\
Summary:
  Rows: 4
  Bound: [1, 30]

Triangle:
     1
    1 1
   1 2 1
  1 3 3 1
";
    assert_eq!(triangle.to_string(), expected);
}
