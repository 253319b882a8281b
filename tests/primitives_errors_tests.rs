#![cfg(feature = "dev")]

use pascal_rs::internals::engine::validator::Validator;
use pascal_rs::internals::primitives::bounds::RowCountBound;
use pascal_rs::internals::primitives::errors::PascalError;

#[test]
fn test_pascal_error_display() {
    // InvalidRowCount
    let err = PascalError::InvalidRowCount {
        got: 31,
        min: 1,
        max: 30,
    };
    assert_eq!(format!("{}", err), "Invalid row count: 31 (must be in [1, 30])");

    // InvalidBounds
    let err = PascalError::InvalidBounds { min: 5, max: 2 };
    assert_eq!(
        format!("{}", err),
        "Invalid row count bound: [5, 2] (min must be at least 1 and not exceed max)"
    );

    // CellOutOfRange
    let err = PascalError::CellOutOfRange {
        row: 4,
        column: 5,
        rows: 10,
    };
    assert_eq!(
        format!("{}", err),
        "Cell (4, 5) is outside a table of 10 rows"
    );

    // RowCountExceedsTable
    let err = PascalError::RowCountExceedsTable {
        requested: 12,
        available: 10,
    };
    assert_eq!(
        format!("{}", err),
        "Requested 12 rows but the table only has 10"
    );

    // IdentityViolation
    let err = PascalError::IdentityViolation("C(3, 1) != C(3, 2)".to_string());
    assert_eq!(format!("{}", err), "Identity violation: C(3, 1) != C(3, 2)");

    // DuplicateParameter
    let err = PascalError::DuplicateParameter { parameter: "rows" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'rows' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_pascal_error_properties() {
    let err1 = PascalError::InvalidBounds { min: 0, max: 1 };
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, PascalError::IdentityViolation("foo".to_string()));
}

#[cfg(feature = "std")]
#[test]
fn test_pascal_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<PascalError>();
}

#[test]
fn test_validator() {
    let bound = RowCountBound::default();
    assert!(Validator::validate_row_count(1, &bound).is_ok());
    assert!(Validator::validate_row_count(0, &bound).is_err());
    assert!(Validator::validate_cell(3, 3, 4).is_ok());
    assert!(Validator::validate_cell(4, 0, 4).is_err());
    assert!(Validator::validate_cell(2, 3, 4).is_err());
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_bounds(3, 3),
        RowCountBound::new(3, 3)
    );
}
