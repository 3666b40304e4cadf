//! Swapping captured entities.
//!
//! [`swap`] exchanges the entities behind two wrappers of the same
//! strategy; for alias wrappers that means exchanging the caller's values.
//! [`swap_value`] exchanges a wrapper's entity with a plain value.
//!
//! Both go through [`Shaped::swap`], so a type with a custom swap hook
//! (`#[capture(swap = path)]`) is swapped with it.

use crate::classify::Shaped;
use crate::facade::{ArrayRef, ArrayValue, RecordRef, RecordValue, ScalarRef, ScalarValue};

/// Swap between two wrappers of the same strategy.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be swapped with `{Rhs}`",
    label = "wrappers must share a strategy and a captured type"
)]
pub trait Swap<Rhs: ?Sized = Self> {
    fn swap_with(&mut self, other: &mut Rhs);
}

/// Swap a wrapper's entity with a plain value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot swap its entity with `{T}`",
    label = "the plain value must have the captured type"
)]
pub trait SwapValue<T> {
    fn swap_value(&mut self, plain: &mut T);
}

/// Swap the entities behind `a` and `b`.
///
/// ```
/// use uni_capture::{capture, swap};
///
/// let (mut x, mut y) = (1i32, 2i32);
/// swap(&mut capture(&mut x), &mut capture(&mut y));
/// assert_eq!((x, y), (2, 1));
/// ```
#[inline]
pub fn swap<A: Swap<B>, B>(a: &mut A, b: &mut B) {
    a.swap_with(b)
}

/// Swap the entity behind `wrapper` with `plain`.
#[inline]
pub fn swap_value<W: SwapValue<T>, T>(wrapper: &mut W, plain: &mut T) {
    wrapper.swap_value(plain)
}

// =============================================================================
// Wrapper <-> wrapper
// =============================================================================

impl<T, const N: usize> Swap<ArrayRef<'_, T, N>> for ArrayRef<'_, T, N> {
    #[inline]
    fn swap_with(&mut self, other: &mut ArrayRef<'_, T, N>) {
        <[T; N] as Shaped>::swap(self, other)
    }
}

impl<T, const N: usize> Swap for ArrayValue<T, N> {
    #[inline]
    fn swap_with(&mut self, other: &mut Self) {
        <[T; N] as Shaped>::swap(self.items_mut(), other.items_mut())
    }
}

impl<T: Shaped> Swap<ScalarRef<'_, T>> for ScalarRef<'_, T> {
    #[inline]
    fn swap_with(&mut self, other: &mut ScalarRef<'_, T>) {
        T::swap(self, other)
    }
}

impl<T: Shaped> Swap for ScalarValue<T> {
    #[inline]
    fn swap_with(&mut self, other: &mut Self) {
        T::swap(self, other)
    }
}

impl<T: Shaped> Swap<RecordRef<'_, T>> for RecordRef<'_, T> {
    #[inline]
    fn swap_with(&mut self, other: &mut RecordRef<'_, T>) {
        T::swap(self, other)
    }
}

impl<T: Shaped> Swap for RecordValue<T> {
    #[inline]
    fn swap_with(&mut self, other: &mut Self) {
        T::swap(self, other)
    }
}

// =============================================================================
// Wrapper <-> plain
// =============================================================================

impl<T, const N: usize> SwapValue<[T; N]> for ArrayRef<'_, T, N> {
    #[inline]
    fn swap_value(&mut self, plain: &mut [T; N]) {
        <[T; N] as Shaped>::swap(self, plain)
    }
}

impl<T, const N: usize> SwapValue<[T; N]> for ArrayValue<T, N> {
    #[inline]
    fn swap_value(&mut self, plain: &mut [T; N]) {
        <[T; N] as Shaped>::swap(self.items_mut(), plain)
    }
}

impl<T: Shaped> SwapValue<T> for ScalarRef<'_, T> {
    #[inline]
    fn swap_value(&mut self, plain: &mut T) {
        T::swap(self, plain)
    }
}

impl<T: Shaped> SwapValue<T> for ScalarValue<T> {
    #[inline]
    fn swap_value(&mut self, plain: &mut T) {
        T::swap(self, plain)
    }
}

impl<T: Shaped> SwapValue<T> for RecordRef<'_, T> {
    #[inline]
    fn swap_value(&mut self, plain: &mut T) {
        T::swap(self, plain)
    }
}

impl<T: Shaped> SwapValue<T> for RecordValue<T> {
    #[inline]
    fn swap_value(&mut self, plain: &mut T) {
        T::swap(self, plain)
    }
}
