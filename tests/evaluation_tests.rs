//! Tests for identity checks, row sums and cell inspection.
//!
//! ## Test Organization
//!
//! 1. **Identity Verification** - Generated tables pass
//! 2. **Row Sums** - Powers of two
//! 3. **Cell Inspection** - Values, parents, mirrors, primality

use pascal_rs::prelude::*;

// ============================================================================
// Identity Verification
// ============================================================================

/// Test that every supported table satisfies the identities.
#[test]
fn test_generated_tables_verify() {
    for rows in 0..=30 {
        let table = generate_table::<f64>(rows);
        assert_eq!(verify_table(&table), Ok(()), "rows = {}", rows);
    }
}

/// Test that f32 tables also verify within tolerance.
#[test]
fn test_f32_table_verifies() {
    let table = generate_table::<f32>(20);
    assert!(verify_table(&table).is_ok());
}

// ============================================================================
// Row Sums
// ============================================================================

/// Test that every row sums to 2^n.
#[test]
fn test_row_sums_are_powers_of_two() {
    let table = generate_table::<f64>(30);
    let sums = row_sums(&table);
    assert_eq!(sums.len(), 30);
    for (n, rs) in sums.iter().enumerate() {
        assert_eq!(rs.row, n);
        assert_eq!(rs.sum, 2f64.powi(n as i32));
        assert!(rs.matches());
    }
}

// ============================================================================
// Cell Inspection
// ============================================================================

/// Test inspecting an interior cell.
#[test]
fn test_inspect_interior() {
    let table = generate_table::<f64>(8);
    let info = inspect_cell(&table, 7, 1).unwrap();
    assert_eq!(info.cell.value, 7.0);
    assert_eq!(info.integer, Some(7));
    assert!(info.is_prime);
    assert_eq!(info.mirror_column, 6);

    let (left, right) = info.parents.unwrap();
    assert_eq!((left.row, left.column, left.value), (6, 0, 1.0));
    assert_eq!((right.row, right.column, right.value), (6, 1, 6.0));
}

/// Test that edge cells have no parents and are not prime.
#[test]
fn test_inspect_edge() {
    let table = generate_table::<f64>(5);
    let info = inspect_cell(&table, 4, 4).unwrap();
    assert_eq!(info.parents, None);
    assert!(!info.is_prime);
    assert_eq!(info.mirror_column, 0);
}

/// Test that composite interior values are not prime.
#[test]
fn test_inspect_composite() {
    let table = generate_table::<f64>(7);
    let info = inspect_cell(&table, 6, 3).unwrap();
    assert_eq!(info.integer, Some(20));
    assert!(!info.is_prime);
}

/// Test that cells outside the table are rejected.
#[test]
fn test_inspect_out_of_range() {
    let table = generate_table::<f64>(5);
    assert_eq!(
        inspect_cell(&table, 5, 0).unwrap_err(),
        PascalError::CellOutOfRange {
            row: 5,
            column: 0,
            rows: 5
        }
    );
    assert!(inspect_cell(&table, 2, 3).is_err());
}
