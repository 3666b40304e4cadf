//! The `Capture` trait and kind dispatch.
//!
//! By-value inputs implement `Capture` directly. Borrowed inputs dispatch
//! through the kind of the borrowed type:
//!
//! ```text
//! &'a mut T --(T::Kind: AliasStrategy)--> ArrayRef | ScalarRef | RecordRef
//! &'a T     --(T::Kind: BorrowStrategy)-> ArrayValue | ScalarValue<&'a T>
//! ```
//!
//! A shared borrow of an array is an array, never a pointer: the element
//! type and length stay visible, so the array rule takes priority over the
//! pointer rule.

use super::kind::{ArrayKind, Kind, RecordKind, ScalarKind, Shaped};
use super::shape::{self, Shape, ShapeTag};
use crate::facade::{ArrayRef, ArrayValue, Captured, RecordRef, ScalarRef, ScalarValue};

/// Classify an input and build its wrapper.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be captured",
    label = "unsupported capture shape",
    note = "capturable inputs are arrays, `&mut` borrows of shaped types, shared borrows, \
            primitive scalars, raw and function pointers, and types deriving `Record` or `Scalar`"
)]
pub trait Capture: Sized {
    /// Strategy chosen for this input.
    type Shape: Shape;
    /// Wrapper built for this input.
    type Wrapper: Captured<Shape = Self::Shape>;

    fn capture(self) -> Self::Wrapper;
}

/// Strategy for `&'a mut T`, selected by `T`'s kind.
pub trait AliasStrategy<'a, T: 'a>: Kind {
    type Shape: Shape;
    type Wrapper: Captured<Shape = Self::Shape>;

    fn alias(target: &'a mut T) -> Self::Wrapper;
}

/// Strategy for `&'a T`, selected by `T`'s kind.
pub trait BorrowStrategy<'a, T: ?Sized + 'a>: Kind {
    type Shape: Shape;
    type Wrapper: Captured<Shape = Self::Shape>;

    fn borrow(target: &'a T) -> Self::Wrapper;
}

// =============================================================================
// Alias dispatch
// =============================================================================

impl<'a, T: 'a> AliasStrategy<'a, T> for ScalarKind {
    type Shape = shape::ScalarReference;
    type Wrapper = ScalarRef<'a, T>;

    #[inline]
    fn alias(target: &'a mut T) -> Self::Wrapper {
        ScalarRef::new(target)
    }
}

impl<'a, T: 'a> AliasStrategy<'a, T> for RecordKind {
    type Shape = shape::RecordReference;
    type Wrapper = RecordRef<'a, T>;

    #[inline]
    fn alias(target: &'a mut T) -> Self::Wrapper {
        RecordRef::new(target)
    }
}

impl<'a, T: 'a, const N: usize> AliasStrategy<'a, [T; N]> for ArrayKind {
    type Shape = shape::BoundedArray;
    type Wrapper = ArrayRef<'a, T, N>;

    #[inline]
    fn alias(target: &'a mut [T; N]) -> Self::Wrapper {
        ArrayRef::new(target)
    }
}

// =============================================================================
// Shared-borrow dispatch
// =============================================================================

impl<'a, T: ?Sized + 'a> BorrowStrategy<'a, T> for ScalarKind {
    type Shape = shape::ScalarValue;
    type Wrapper = ScalarValue<&'a T>;

    #[inline]
    fn borrow(target: &'a T) -> Self::Wrapper {
        ScalarValue::new(target)
    }
}

impl<'a, T: ?Sized + 'a> BorrowStrategy<'a, T> for RecordKind {
    type Shape = shape::ScalarValue;
    type Wrapper = ScalarValue<&'a T>;

    #[inline]
    fn borrow(target: &'a T) -> Self::Wrapper {
        ScalarValue::new(target)
    }
}

impl<'a, T: Clone + 'a, const N: usize> BorrowStrategy<'a, [T; N]> for ArrayKind {
    type Shape = shape::ConstBoundedArray;
    type Wrapper = ArrayValue<T, N>;

    #[inline]
    fn borrow(target: &'a [T; N]) -> Self::Wrapper {
        ArrayValue::from_ref(target)
    }
}

// =============================================================================
// Capture impls for borrows and arrays
// =============================================================================

impl<'a, T> Capture for &'a mut T
where
    T: Shaped + 'a,
    T::Kind: AliasStrategy<'a, T>,
{
    type Shape = <T::Kind as AliasStrategy<'a, T>>::Shape;
    type Wrapper = <T::Kind as AliasStrategy<'a, T>>::Wrapper;

    #[inline]
    fn capture(self) -> Self::Wrapper {
        <T::Kind as AliasStrategy<'a, T>>::alias(self)
    }
}

impl<'a, T> Capture for &'a T
where
    T: Shaped + ?Sized + 'a,
    T::Kind: BorrowStrategy<'a, T>,
{
    type Shape = <T::Kind as BorrowStrategy<'a, T>>::Shape;
    type Wrapper = <T::Kind as BorrowStrategy<'a, T>>::Wrapper;

    #[inline]
    fn capture(self) -> Self::Wrapper {
        <T::Kind as BorrowStrategy<'a, T>>::borrow(self)
    }
}

impl<T, const N: usize> Capture for [T; N] {
    type Shape = shape::ConstBoundedArray;
    type Wrapper = ArrayValue<T, N>;

    #[inline]
    fn capture(self) -> Self::Wrapper {
        ArrayValue::new(self)
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Strategy selected for `X`.
pub type ShapeOf<X> = <X as Capture>::Shape;

/// Wrapper built for `X`.
pub type CaptureOf<X> = <X as Capture>::Wrapper;

/// Capture a value.
///
/// ```
/// use uni_capture::{capture, ShapeTag, shape_of};
///
/// let mut x = 42i32;
/// assert_eq!(shape_of(&&mut x), ShapeTag::ScalarReference);
///
/// let mut w = capture(&mut x);
/// *w = 49;
/// assert_eq!(x, 49);
/// ```
#[inline]
pub fn capture<X: Capture>(input: X) -> X::Wrapper {
    input.capture()
}

/// Strategy that capturing `input` would select.
#[inline]
pub fn shape_of<X: Capture>(_input: &X) -> ShapeTag {
    <X::Shape as Shape>::TAG
}
