//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! Post-generation checks and derived facts: identity verification, row
//! sums and single-cell inspection.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Identity checks and row sums.
pub mod identities;

/// Single-cell inspection.
pub mod inspection;
