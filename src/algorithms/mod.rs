//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! The combinatorial core: table generation, pattern extraction and
//! binomial expansion terms.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Coefficient table generation.
pub mod generator;

/// Diagonal and fixed-column pattern extraction.
pub mod patterns;

/// Binomial expansion terms.
pub mod expansion;
