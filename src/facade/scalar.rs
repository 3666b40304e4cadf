//! Scalar wrappers.

use core::ops::{Deref, DerefMut};

use super::{sealed::Sealed, Captured};
use crate::classify::{shape, Shaped};

/// Alias of a caller-owned scalar (`ScalarReference`).
///
/// Writes through the wrapper are writes to the original.
pub struct ScalarRef<'a, T> {
    target: &'a mut T,
}

impl<'a, T> ScalarRef<'a, T> {
    #[inline]
    pub fn new(target: &'a mut T) -> Self {
        Self { target }
    }

    /// Replace the aliased value, returning the previous one.
    #[inline]
    pub fn set(&mut self, value: T) -> T {
        core::mem::replace(self.target, value)
    }

    /// Shorter-lived alias of the same entity.
    #[inline]
    pub fn reborrow(&mut self) -> ScalarRef<'_, T> {
        ScalarRef::new(&mut *self.target)
    }
}

impl<T> Deref for ScalarRef<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &*self.target
    }
}

impl<T> DerefMut for ScalarRef<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.target
    }
}

impl<T> Sealed for ScalarRef<'_, T> {}

impl<'a, T> Captured for ScalarRef<'a, T> {
    type Shape = shape::ScalarReference;
    type Type = &'a mut T;
    type Target = T;

    #[inline]
    fn entity(&self) -> &T {
        &*self.target
    }

    #[inline]
    fn readback(self) -> &'a mut T {
        self.target
    }
}

/// Owned copy of a scalar (`ScalarValue`).
///
/// Covers numbers, pointers, shared references, function pointers and
/// enums. Mutating the wrapper mutates the copy only.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct ScalarValue<T> {
    value: T,
}

impl<T> ScalarValue<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Alias the wrapper's own copy, so several sites share it.
    #[inline]
    pub fn promote(&mut self) -> ScalarRef<'_, T> {
        ScalarRef::new(&mut self.value)
    }
}

impl<T> Deref for ScalarValue<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for ScalarValue<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Sealed for ScalarValue<T> {}

impl<T: Shaped> Captured for ScalarValue<T> {
    type Shape = shape::ScalarValue;
    type Type = T;
    type Target = T;

    #[inline]
    fn entity(&self) -> &T {
        &self.value
    }

    #[inline]
    fn readback(self) -> T {
        self.value
    }

    /// Honors a custom [`Shaped::address`] the same way records do.
    #[inline]
    fn address_of(&self) -> *const T {
        T::address(&self.value)
    }
}
