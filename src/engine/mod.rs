//! Layer 5: Engine
//!
//! # Purpose
//!
//! Orchestration: validation, triangle construction, the result type, and
//! the view-state driven overlay planner.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Triangle construction.
pub mod executor;

/// Result type.
pub mod output;

/// Overlay planning.
pub mod overlay;

/// Input validation.
pub mod validator;

/// Immutable view state.
pub mod view;
