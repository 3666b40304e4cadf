#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: record shapes for String, Vec and Box in no_std
// - raw-buffer: MaybeUninit storage for ArrayValue

//! # uni-capture
//!
//! Generic value capture with compile-time strategy selection.
//!
//! **One wrapper type per input shape, usable like the original value.**
//!
//! ## Architecture
//!
//! `uni-capture` classifies any capturable input by its static shape and
//! stores it under exactly one of six strategies:
//!
//! ```text
//! input                      strategy            wrapper
//! -------------------------  ------------------  ---------------------
//! &mut [T; N]                BoundedArray        ArrayRef<'a, T, N>
//! [T; N], &[T; N], "lit"     ConstBoundedArray   ArrayValue<T, N>
//! &mut scalar                ScalarReference     ScalarRef<'a, T>
//! &mut record                RecordReference     RecordRef<'a, T>
//! scalar, &T, ptr, fn ptr    ScalarValue         ScalarValue<T>
//! record                     RecordValue         RecordValue<T>
//! ```
//!
//! Alias strategies borrow the caller's entity and never copy; value
//! strategies own a copy and never alias.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Same                                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Shape Classifier                                        |
//! |  - Shape tags, Kind, Shaped, Capture, Alias/BorrowStrategy        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Capture Facade                                          |
//! |  - ArrayRef, ArrayValue, ScalarRef, ScalarValue, RecordRef, ...   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3/4: Operators and Accessors                               |
//! |  - Operand, Callable, MemberPtr, Simplify, swap, promote          |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Capability gating
//!
//! A wrapper exposes an operator only if the captured type has it. There
//! is no runtime check: a missing capability is a compile error.
//!
//! ```compile_fail
//! use uni_capture::capture;
//!
//! let w = capture(true);
//! let _ = w + 1i32; // bool has no Add
//! ```
//!
//! Value wrappers never write through, so they have no compound
//! assignment:
//!
//! ```compile_fail
//! use uni_capture::capture;
//!
//! let mut w = capture(1i32);
//! w += 1i32;
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use uni_capture::prelude::*;
//!
//! #[derive(Record, Clone, Copy)]
//! struct Gauge {
//!     val: i32,
//! }
//!
//! // Array by value: an owned copy.
//! let digits = capture([1, 8, 9, 20]);
//! assert_eq!(digits.len(), 4);
//! assert_eq!(digits.shape(), ShapeTag::ConstBoundedArray);
//!
//! // String literal: its bytes.
//! let text = capture!("foobar");
//! assert_eq!(text[3], b'b');
//!
//! // Scalar by alias: writes reach the original.
//! let mut x = 42i32;
//! let mut w = capture(&mut x);
//! w += 7i32;
//! assert_eq!(x, 49);
//!
//! // Record by value: field access on the copy.
//! let g = Gauge { val: 6 };
//! let copy = capture(g);
//! assert_eq!(copy.val, 6);
//! ```

// Allow `::uni_capture` to work inside the crate itself
extern crate self as uni_capture;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Shape Classifier
// =============================================================================
pub mod classify;

// =============================================================================
// Layer 2: Capture Facade
// =============================================================================
pub mod facade;

// =============================================================================
// Layer 3: Operator Forwarding
// =============================================================================
pub mod ops;

// =============================================================================
// Layer 4: Accessors
// =============================================================================
pub mod access;

// Syntax macros (member!, method!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Absent, Bool, Present, Same, assert_same};
pub use classify::shape;
pub use classify::{
    AliasStrategy, ArrayKind, BorrowStrategy, Capture, CaptureOf, Kind, KindOf, RecordKind,
    ScalarKind, Shape, ShapeOf, ShapeTag, Shaped, capture, shape_of,
};
pub use facade::{ArrayRef, ArrayValue, Captured, RecordRef, RecordValue, ScalarRef, ScalarValue};
pub use ops::{
    BoundMember, Callable, Field, MemberPtr, MemberReceiver, Method, Operand, apply_member,
};
pub use access::{
    ExtractType, Simplified, Simplify, Swap, SwapValue, promote, swap, swap_value,
};

// Re-export proc-macros
pub use macros::{Record, Scalar, capture};

/// Common items for capturing values.
pub mod prelude {
    pub use crate::classify::{Capture, ShapeTag, capture, shape_of};
    pub use crate::facade::Captured;
    pub use crate::ops::{Callable, MemberReceiver, apply_member};
    pub use crate::access::{promote, swap, swap_value};
    pub use crate::{member, method};
    pub use macros::{Record, Scalar, capture};
}
