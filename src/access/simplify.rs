//! Type simplification.
//!
//! `Simplified<X>` strips what does not matter for comparing captured
//! types: references are removed and arrays decay to element pointers.
//!
//! ```text
//! &mut [u8; 4]       -> *const u8
//! &str               -> *const u8
//! &&i32              -> i32
//! ScalarRef<'_, f64> -> f64
//! ```
//!
//! Simplification is idempotent: `Simplified<Simplified<X>>` is
//! `Simplified<X>`.

use crate::facade::{ArrayRef, ArrayValue, RecordRef, RecordValue, ScalarRef, ScalarValue};

/// Canonical form of a type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no simplified form",
    note = "derive `Record` or `Scalar` to make user types simplifiable"
)]
pub trait Simplify {
    type Out;
}

/// Canonical form of `X`.
pub type Simplified<X> = <X as Simplify>::Out;

impl<T, const N: usize> Simplify for ArrayRef<'_, T, N> {
    type Out = *const T;
}

impl<T, const N: usize> Simplify for ArrayValue<T, N> {
    type Out = *const T;
}

impl<T: Simplify> Simplify for ScalarRef<'_, T> {
    type Out = T::Out;
}

impl<T: Simplify> Simplify for ScalarValue<T> {
    type Out = T::Out;
}

impl<T: Simplify> Simplify for RecordRef<'_, T> {
    type Out = T::Out;
}

impl<T: Simplify> Simplify for RecordValue<T> {
    type Out = T::Out;
}
