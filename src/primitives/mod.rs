//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Plain data structures shared by every other layer: the coefficient
//! table, cell records, row count bounds and the crate error type.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type.
pub mod errors;

/// Row count bounds.
pub mod bounds;

/// Coefficient table and cell records.
pub mod table;
