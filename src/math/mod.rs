//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Binomial coefficients via the multiplicative formula
//! - Primality classification
//!
//! These are reusable building blocks with no knowledge of tables or patterns.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single binomial coefficients.
pub mod binomial;

/// Primality testing.
pub mod primes;
