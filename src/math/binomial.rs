//! Binomial coefficients via the multiplicative formula.
//!
//! ## Purpose
//!
//! This module computes single binomial coefficients `C(n, k)` and converts
//! floating results back to exact integers for display and classification.
//!
//! ## Design notes
//!
//! * **Algorithm**: Running product `Π_{i=1..k} (n - i + 1) / i`, evaluated
//!   left to right. Each partial product is itself a binomial coefficient,
//!   so no factorial is ever formed.
//! * **Edges**: `k == 0` and `k == n` return exactly one without looping.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * For `f64` and `n <= 30` every result is an exact integer.
//! * `coefficient(n, k) == coefficient(n, n - k)`.
//!
//! ## Non-goals
//!
//! * This module does not provide arbitrary-precision coefficients.
//! * This module does not validate `(n, k)` (see `engine::validator`).

// External dependencies
use num_traits::Float;

/// Relative distance from the nearest integer still accepted as integral.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Convert a count to `T`.
#[inline]
pub(crate) fn cast<T: Float>(value: usize) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Compute `C(n, k)` with the running product.
///
/// Returns zero when `k > n`, the number of ways to pick more items than exist.
#[inline]
pub fn coefficient<T: Float>(n: usize, k: usize) -> T {
    if k == 0 || k == n {
        return T::one();
    }
    if k > n {
        return T::zero();
    }

    let n_t: T = cast(n);
    let mut result = T::one();
    for i in 1..=k {
        let i_t: T = cast(i);
        result = result * (n_t - i_t + T::one()) / i_t;
    }
    result
}

/// Round a coefficient to the integer it approximates.
///
/// Returns `None` for non-finite or negative values, and for values further
/// than [`INTEGRALITY_TOLERANCE`] (relative) from the nearest integer.
pub fn to_integer<T: Float>(value: T) -> Option<u64> {
    if !value.is_finite() || value < T::zero() {
        return None;
    }

    let rounded = value.round();
    let tolerance = T::from(INTEGRALITY_TOLERANCE)? * rounded.max(T::one());
    if (value - rounded).abs() > tolerance {
        return None;
    }
    rounded.to_u64()
}
