//! # Layer 1: Shape Classifier
//!
//! Maps an input's static shape onto exactly one storage strategy.
//!
//! | Input | Strategy | Wrapper |
//! |-------|----------|---------|
//! | `[T; N]`, `&[T; N]` | `ConstBoundedArray` | `ArrayValue<T, N>` |
//! | `&mut [T; N]` | `BoundedArray` | `ArrayRef<'a, T, N>` |
//! | `&mut T`, scalar `T` | `ScalarReference` | `ScalarRef<'a, T>` |
//! | `&mut T`, record `T` | `RecordReference` | `RecordRef<'a, T>` |
//! | record by value | `RecordValue` | `RecordValue<T>` |
//! | anything else | `ScalarValue` | `ScalarValue<T>` |
//!
//! The decision is made entirely by trait resolution. An input matching no
//! row is rejected at compile time.

pub(crate) mod builtin;
pub mod capture;
pub mod kind;
pub mod shape;

pub use capture::{
    capture, shape_of, AliasStrategy, BorrowStrategy, Capture, CaptureOf, ShapeOf,
};
pub use kind::{ArrayKind, Kind, KindOf, RecordKind, ScalarKind, Shaped};
pub use shape::{Shape, ShapeTag};
