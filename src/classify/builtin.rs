//! Classification of built-in types.
//!
//! Primitive scalars, raw pointers and function pointers capture by value
//! into [`ScalarValue`](crate::ScalarValue). With `alloc`, owning containers
//! are records and capture into [`RecordValue`](crate::RecordValue).

use super::kind::{ArrayKind, ScalarKind, Shaped};
use crate::access::Simplify;
use crate::ops::Operand;

/// Implement `Shaped`, `Capture`, `Operand` and `Simplify` for a type that
/// captures by value and simplifies to itself.
macro_rules! impl_plain {
    (scalar: [$($g:tt)*] $T:ty) => {
        $crate::classify::builtin::impl_plain!(@impl ScalarKind ScalarValue [$($g)*] $T);
    };
    (record: [$($g:tt)*] $T:ty) => {
        $crate::classify::builtin::impl_plain!(@impl RecordKind RecordValue [$($g)*] $T);
    };
    (@impl $Kind:ident $Strategy:ident [$($g:tt)*] $T:ty) => {
        impl<$($g)*> $crate::classify::Shaped for $T {
            type Kind = $crate::classify::$Kind;
        }

        impl<$($g)*> $crate::classify::Capture for $T {
            type Shape = $crate::classify::shape::$Strategy;
            type Wrapper = $crate::facade::$Strategy<Self>;

            #[inline]
            fn capture(self) -> Self::Wrapper {
                $crate::facade::$Strategy::new(self)
            }
        }

        impl<$($g)*> $crate::ops::Operand for $T {
            type Target = Self;
            type Value = Self;

            #[inline]
            fn target(&self) -> &Self {
                self
            }

            #[inline]
            fn into_value(self) -> Self {
                self
            }
        }

        impl<$($g)*> $crate::access::Simplify for $T {
            type Out = Self;
        }
    };
}

pub(crate) use impl_plain;

macro_rules! impl_plain_scalars {
    ($($T:ty),+ $(,)?) => {
        $( impl_plain!(scalar: [] $T); )+
    };
}

impl_plain_scalars!(
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    core::num::NonZeroU8, core::num::NonZeroU16, core::num::NonZeroU32,
    core::num::NonZeroU64, core::num::NonZeroU128, core::num::NonZeroUsize,
    core::num::NonZeroI8, core::num::NonZeroI16, core::num::NonZeroI32,
    core::num::NonZeroI64, core::num::NonZeroI128, core::num::NonZeroIsize,
    core::cmp::Ordering,
    core::time::Duration,
);

impl_plain!(scalar: [T: ?Sized] *const T);
impl_plain!(scalar: [T: ?Sized] *mut T);

// Function pointers. Signatures with borrowed arguments are higher-ranked
// and are not covered; wrap those in `Method`.
macro_rules! impl_plain_fn_ptrs {
    ($($A:ident)*) => {
        impl_plain!(scalar: [O, $($A,)*] fn($($A),*) -> O);
    };
}

impl_plain_fn_ptrs!();
impl_plain_fn_ptrs!(A1);
impl_plain_fn_ptrs!(A1 A2);
impl_plain_fn_ptrs!(A1 A2 A3);
impl_plain_fn_ptrs!(A1 A2 A3 A4);
impl_plain_fn_ptrs!(A1 A2 A3 A4 A5);
impl_plain_fn_ptrs!(A1 A2 A3 A4 A5 A6);

#[cfg(feature = "alloc")]
mod owned {
    impl_plain!(record: [] alloc::string::String);
    impl_plain!(record: [T] alloc::vec::Vec<T>);
    impl_plain!(record: [T: ?Sized] alloc::boxed::Box<T>);
}

// =============================================================================
// Arrays, unsized pointees and references
// =============================================================================

impl<T, const N: usize> Shaped for [T; N] {
    type Kind = ArrayKind;
}

impl<T> Shaped for [T] {
    type Kind = ScalarKind;
}

impl Shaped for str {
    type Kind = ScalarKind;
}

impl<T: ?Sized> Shaped for &T {
    type Kind = ScalarKind;
}

impl<T: ?Sized> Shaped for &mut T {
    type Kind = ScalarKind;
}

impl<T, const N: usize> Operand for [T; N] {
    type Target = Self;
    type Value = Self;

    #[inline]
    fn target(&self) -> &Self {
        self
    }

    #[inline]
    fn into_value(self) -> Self {
        self
    }
}

impl<'a, T: ?Sized> Operand for &'a T {
    type Target = &'a T;
    type Value = &'a T;

    #[inline]
    fn target(&self) -> &&'a T {
        self
    }

    #[inline]
    fn into_value(self) -> &'a T {
        self
    }
}

impl<'a, T: ?Sized> Operand for &'a mut T {
    type Target = &'a mut T;
    type Value = &'a mut T;

    #[inline]
    fn target(&self) -> &&'a mut T {
        self
    }

    #[inline]
    fn into_value(self) -> &'a mut T {
        self
    }
}

impl<T, const N: usize> Simplify for [T; N] {
    type Out = *const T;
}

impl<T> Simplify for [T] {
    type Out = *const T;
}

impl Simplify for str {
    type Out = *const u8;
}

impl<T: ?Sized + Simplify> Simplify for &T {
    type Out = T::Out;
}

impl<T: ?Sized + Simplify> Simplify for &mut T {
    type Out = T::Out;
}
