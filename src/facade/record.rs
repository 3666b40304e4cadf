//! Record wrappers.
//!
//! `RecordValue<T>` is `#[repr(transparent)]` over the copied record, so the
//! wrapper and the copy share one address and field syntax (`w.field`)
//! reaches the copy through `Deref`.

use core::ops::{Deref, DerefMut};

use super::{sealed::Sealed, Captured};
use crate::classify::{shape, Shaped};

/// Alias of a caller-owned record (`RecordReference`).
pub struct RecordRef<'a, T> {
    target: &'a mut T,
}

impl<'a, T> RecordRef<'a, T> {
    #[inline]
    pub fn new(target: &'a mut T) -> Self {
        Self { target }
    }

    /// Replace the aliased record, returning the previous one.
    #[inline]
    pub fn set(&mut self, value: T) -> T {
        core::mem::replace(self.target, value)
    }

    #[inline]
    pub fn reborrow(&mut self) -> RecordRef<'_, T> {
        RecordRef::new(&mut *self.target)
    }
}

impl<T> Deref for RecordRef<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &*self.target
    }
}

impl<T> DerefMut for RecordRef<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.target
    }
}

impl<T> Sealed for RecordRef<'_, T> {}

impl<'a, T> Captured for RecordRef<'a, T> {
    type Shape = shape::RecordReference;
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

/// Owned copy of a record (`RecordValue`). The wrapper is the copy.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct RecordValue<T>(T);

impl<T> RecordValue<T> {
    #[inline]
    pub const fn new(record: T) -> Self {
        Self(record)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Alias the wrapper's own copy, so several sites share it.
    #[inline]
    pub fn promote(&mut self) -> RecordRef<'_, T> {
        RecordRef::new(&mut self.0)
    }
}

impl<T> Deref for RecordValue<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for RecordValue<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Sealed for RecordValue<T> {}

impl<T: Shaped> Captured for RecordValue<T> {
    type Shape = shape::RecordValue;
    type Type = T;
    type Target = T;

    #[inline]
    fn entity(&self) -> &T {
        &self.0
    }

    #[inline]
    fn readback(self) -> T {
        self.0
    }

    /// The wrapper's own address, unless the record type overrides
    /// [`Shaped::address`].
    #[inline]
    fn address_of(&self) -> *const T {
        T::address(&self.0)
    }
}
