//! # Layer 0: Primitives
//!
//! Basic building blocks for the classifier:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `same.rs`: Type equality witness.

pub mod bool;
pub mod same;

// Re-export key types at this level
pub use bool::{Absent, Bool, Present, SelectBool};
pub use same::{assert_same, Same};
