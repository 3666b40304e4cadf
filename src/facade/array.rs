//! Array wrappers.
//!
//! `ArrayRef` aliases a caller's `[T; N]` and is read-write. `ArrayValue`
//! owns an element-wise copy and is read-only: it never hands out `&mut`
//! to its elements.

use core::ops::{Deref, DerefMut};
use core::slice;

use super::storage::Storage;
use super::{sealed::Sealed, Captured};
use crate::classify::shape;

// =============================================================================
// ArrayRef (BoundedArray)
// =============================================================================

/// Alias of a caller-owned array (`BoundedArray`).
pub struct ArrayRef<'a, T, const N: usize> {
    items: &'a mut [T; N],
}

impl<'a, T, const N: usize> ArrayRef<'a, T, N> {
    #[inline]
    pub fn new(items: &'a mut [T; N]) -> Self {
        Self { items }
    }

    /// Static length of the captured array.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items[..]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[..]
    }

    /// Owned copy of the aliased elements.
    #[inline]
    pub fn to_array(&self) -> [T; N]
    where
        T: Clone,
    {
        self.items.clone()
    }

    #[inline]
    pub fn reborrow(&mut self) -> ArrayRef<'_, T, N> {
        ArrayRef::new(&mut *self.items)
    }
}

impl<T, const N: usize> Deref for ArrayRef<'_, T, N> {
    type Target = [T; N];

    #[inline]
    fn deref(&self) -> &[T; N] {
        &*self.items
    }
}

impl<T, const N: usize> DerefMut for ArrayRef<'_, T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T; N] {
        &mut *self.items
    }
}

impl<'a, T, const N: usize> IntoIterator for ArrayRef<'a, T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<'w, T, const N: usize> IntoIterator for &'w ArrayRef<'_, T, N> {
    type Item = &'w T;
    type IntoIter = slice::Iter<'w, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'w, T, const N: usize> IntoIterator for &'w mut ArrayRef<'_, T, N> {
    type Item = &'w mut T;
    type IntoIter = slice::IterMut<'w, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T, const N: usize> Sealed for ArrayRef<'_, T, N> {}

impl<'a, T, const N: usize> Captured for ArrayRef<'a, T, N> {
    type Shape = shape::BoundedArray;
    type Type = &'a mut [T; N];
    type Target = [T; N];

    #[inline]
    fn entity(&self) -> &[T; N] {
        &*self.items
    }

    #[inline]
    fn readback(self) -> &'a mut [T; N] {
        self.items
    }
}

// =============================================================================
// ArrayValue (ConstBoundedArray)
// =============================================================================

/// Owned copy of a constant array (`ConstBoundedArray`).
///
/// Read-only: the copy stands for a constant, so there is no `DerefMut`,
/// no `IndexMut` and no compound assignment.
///
/// ```compile_fail
/// use uni_capture::capture;
///
/// let mut w = capture([1u8, 2, 3]);
/// w[0] = 9;
/// ```
pub struct ArrayValue<T, const N: usize> {
    items: Storage<T, N>,
}

impl<T, const N: usize> ArrayValue<T, N> {
    #[inline]
    pub fn new(items: [T; N]) -> Self {
        Self {
            items: Storage::from_array(items),
        }
    }

    /// Copy `items` element by element.
    #[inline]
    pub fn from_ref(items: &[T; N]) -> Self
    where
        T: Clone,
    {
        Self::new(core::array::from_fn(|i| items[i].clone()))
    }

    /// Static length of the captured array.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.as_array().iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_array()[..]
    }

    /// Owned copy of the elements.
    #[inline]
    pub fn to_array(&self) -> [T; N]
    where
        T: Clone,
    {
        self.items.as_array().clone()
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.items.into_array()
    }

    // Only the swap accessors write into the copy.
    #[inline]
    pub(crate) fn items_mut(&mut self) -> &mut [T; N] {
        self.items.as_array_mut()
    }
}

impl<const N: usize> ArrayValue<u8, N> {
    /// View captured bytes (e.g. a string literal) as text.
    #[inline]
    pub fn as_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_slice())
    }
}

impl<T: Clone, const N: usize> Clone for ArrayValue<T, N> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T, const N: usize> Deref for ArrayValue<T, N> {
    type Target = [T; N];

    #[inline]
    fn deref(&self) -> &[T; N] {
        self.items.as_array()
    }
}

impl<T, const N: usize> IntoIterator for ArrayValue<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_array().into_iter()
    }
}

impl<'w, T, const N: usize> IntoIterator for &'w ArrayValue<T, N> {
    type Item = &'w T;
    type IntoIter = slice::Iter<'w, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, const N: usize> Sealed for ArrayValue<T, N> {}

impl<T, const N: usize> Captured for ArrayValue<T, N> {
    type Shape = shape::ConstBoundedArray;
    type Type = [T; N];
    type Target = [T; N];

    #[inline]
    fn entity(&self) -> &[T; N] {
        self.items.as_array()
    }

    #[inline]
    fn readback(self) -> [T; N] {
        self.into_array()
    }
}
