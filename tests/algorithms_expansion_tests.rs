//! Tests for binomial expansion terms.
//!
//! ## Test Organization
//!
//! 1. **Terms** - Coefficients and exponents
//! 2. **Display** - Plain-text rendering

use pascal_rs::prelude::*;

// ============================================================================
// Terms
// ============================================================================

/// Test the cube expansion triples.
#[test]
fn test_cube_terms() {
    let terms: Vec<(f64, usize, usize)> = expansion_terms::<f64>(3)
        .iter()
        .map(|t| (t.coefficient, t.a_exponent, t.b_exponent))
        .collect();
    assert_eq!(
        terms,
        vec![(1.0, 3, 0), (3.0, 2, 1), (3.0, 1, 2), (1.0, 0, 3)]
    );
}

/// Test that exponents always add up to n and coefficients match the table row.
#[test]
fn test_terms_match_row() {
    let table = generate_table::<f64>(16);
    for n in 0..16 {
        let terms = expansion_terms::<f64>(n);
        assert_eq!(terms.len(), n + 1);
        for (k, term) in terms.iter().enumerate() {
            assert_eq!(term.a_exponent + term.b_exponent, n);
            assert_eq!(term.b_exponent, k);
            assert_eq!(Some(term.coefficient), table.get(n, k));
        }
    }
}

// ============================================================================
// Display
// ============================================================================

/// Test rendering of small powers.
#[test]
fn test_display() {
    assert_eq!(Expansion::<f64>::new(1).to_string(), "(a + b)^1 = a + b");
    assert_eq!(
        Expansion::<f64>::new(2).to_string(),
        "(a + b)^2 = a^2 + 2ab + b^2"
    );
    assert_eq!(
        Expansion::<f64>::new(4).to_string(),
        "(a + b)^4 = a^4 + 4a^3b + 6a^2b^2 + 4ab^3 + b^4"
    );
}

/// Test rendering of a single term.
#[test]
fn test_term_display() {
    let term = ExpansionTerm {
        coefficient: 10.0_f64,
        a_exponent: 3,
        b_exponent: 2,
    };
    assert_eq!(term.to_string(), "10a^3b^2");
}
