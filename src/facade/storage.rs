//! Backing storage for `ArrayValue`.
//!
//! Default: a plain `[T; N]`. With the `raw-buffer` feature: a bounded
//! buffer of `MaybeUninit<T>` slots that is fully initialized from
//! construction to drop. Both expose the same API.

#[cfg(not(feature = "raw-buffer"))]
mod imp {
    #[derive(Clone)]
    #[repr(transparent)]
    pub struct Storage<T, const N: usize>([T; N]);

    impl<T, const N: usize> Storage<T, N> {
        #[inline]
        pub fn from_array(items: [T; N]) -> Self {
            Self(items)
        }

        #[inline]
        pub fn as_array(&self) -> &[T; N] {
            &self.0
        }

        #[inline]
        pub fn as_array_mut(&mut self) -> &mut [T; N] {
            &mut self.0
        }

        #[inline]
        pub fn into_array(self) -> [T; N] {
            self.0
        }
    }
}

#[cfg(feature = "raw-buffer")]
mod imp {
    use core::mem::{ManuallyDrop, MaybeUninit};
    use core::ptr;

    // Invariant: every slot is initialized.
    pub struct Storage<T, const N: usize> {
        slots: [MaybeUninit<T>; N],
    }

    impl<T, const N: usize> Storage<T, N> {
        #[inline]
        pub fn from_array(items: [T; N]) -> Self {
            Self {
                slots: items.map(MaybeUninit::new),
            }
        }

        #[inline]
        pub fn as_array(&self) -> &[T; N] {
            // SAFETY: all slots are initialized and `MaybeUninit<T>` has the layout of `T`.
            unsafe { &*self.slots.as_ptr().cast::<[T; N]>() }
        }

        #[inline]
        pub fn as_array_mut(&mut self) -> &mut [T; N] {
            // SAFETY: as in `as_array`.
            unsafe { &mut *self.slots.as_mut_ptr().cast::<[T; N]>() }
        }

        #[inline]
        pub fn into_array(self) -> [T; N] {
            let this = ManuallyDrop::new(self);
            // SAFETY: all slots are initialized; `this` is never dropped, so the
            // elements are moved out exactly once.
            unsafe { ptr::read(this.slots.as_ptr().cast::<[T; N]>()) }
        }
    }

    impl<T, const N: usize> Drop for Storage<T, N> {
        fn drop(&mut self) {
            // SAFETY: all slots are initialized and dropped only here.
            unsafe { ptr::drop_in_place(self.as_array_mut()) }
        }
    }

    impl<T: Clone, const N: usize> Clone for Storage<T, N> {
        fn clone(&self) -> Self {
            Self::from_array(self.as_array().clone())
        }
    }
}

pub(crate) use imp::Storage;
