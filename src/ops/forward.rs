//! Operator forwarding for the six wrappers.
//!
//! Every impl here is gated by a bound on the captured type: a wrapper
//! implements `Add<R>` exactly when its operand value implements
//! `Add<R::Value>`, and so on. Compound assignment is generated only for the
//! alias wrappers; on a value wrapper it would silently mutate a copy.
//!
//! Each macro takes the impl generics in brackets (with a trailing comma),
//! the wrapper type, and either its consumed operand type (`=> V`) or its
//! deref target (`: T`).

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut, Neg, Not};

use super::call::Callable;
use super::operand::Operand;
use crate::facade::{ArrayRef, ArrayValue, RecordRef, RecordValue, ScalarRef, ScalarValue};

/// `W ⊗ R` for every binary operator, `R: Operand`.
macro_rules! forward_binary {
    ([$($g:tt)*] $W:ty => $V:ty) => {
        forward_binary!(@each [$($g)*] $W => $V;
            Add add, Sub sub, Mul mul, Div div, Rem rem,
            BitAnd bitand, BitOr bitor, BitXor bitxor, Shl shl, Shr shr);
    };
    (@each $gg:tt $W:ty => $V:ty; $($Op:ident $method:ident),+) => {
        $( forward_binary!(@one $gg $W => $V; $Op $method); )+
    };
    (@one [$($g:tt)*] $W:ty => $V:ty; $Op:ident $method:ident) => {
        impl<$($g)* __R> core::ops::$Op<__R> for $W
        where
            __R: Operand,
            $V: core::ops::$Op<__R::Value>,
        {
            type Output = <$V as core::ops::$Op<__R::Value>>::Output;

            #[inline]
            fn $method(self, rhs: __R) -> Self::Output {
                core::ops::$Op::$method(Operand::into_value(self), rhs.into_value())
            }
        }
    };
}

/// `-W` and `!W`.
macro_rules! forward_unary {
    ([$($g:tt)*] $W:ty => $V:ty) => {
        impl<$($g)*> Neg for $W
        where
            $V: Neg,
        {
            type Output = <$V as Neg>::Output;

            #[inline]
            fn neg(self) -> Self::Output {
                Neg::neg(Operand::into_value(self))
            }
        }

        impl<$($g)*> Not for $W
        where
            $V: Not,
        {
            type Output = <$V as Not>::Output;

            #[inline]
            fn not(self) -> Self::Output {
                Not::not(Operand::into_value(self))
            }
        }
    };
}

/// `W ⊗= R` writing through to the aliased entity.
macro_rules! forward_assign {
    ([$($g:tt)*] $W:ty: $T:ty) => {
        forward_assign!(@each [$($g)*] $W: $T;
            Add add, Sub sub, Mul mul, Div div, Rem rem,
            BitAnd bitand, BitOr bitor, BitXor bitxor, Shl shl, Shr shr);
    };
    (@each $gg:tt $W:ty: $T:ty; $($Op:ident $method:ident),+) => {
        $( forward_assign!(@one $gg $W: $T; $Op $method); )+
    };
    (@one [$($g:tt)*] $W:ty: $T:ty; $Op:ident $method:ident) => {
        paste::paste! {
            impl<$($g)* __R> core::ops::[<$Op Assign>]<__R> for $W
            where
                __R: Operand,
                $T: core::ops::[<$Op Assign>]<__R::Value>,
            {
                #[inline]
                fn [<$method _assign>](&mut self, rhs: __R) {
                    core::ops::[<$Op Assign>]::[<$method _assign>](&mut **self, rhs.into_value());
                }
            }
        }
    };
}

/// Equality, ordering, hashing and `Debug`, all by reference.
macro_rules! forward_compare {
    ([$($g:tt)*] $W:ty: $T:ty) => {
        impl<$($g)* __R> PartialEq<__R> for $W
        where
            __R: Operand,
            $T: PartialEq<__R::Target>,
        {
            #[inline]
            fn eq(&self, other: &__R) -> bool {
                PartialEq::eq(&**self, other.target())
            }
        }

        impl<$($g)*> Eq for $W where $T: Eq {}

        impl<$($g)* __R> PartialOrd<__R> for $W
        where
            __R: Operand,
            $T: PartialOrd<__R::Target>,
        {
            #[inline]
            fn partial_cmp(&self, other: &__R) -> Option<Ordering> {
                PartialOrd::partial_cmp(&**self, other.target())
            }
        }

        impl<$($g)*> Ord for $W
        where
            $T: Ord,
        {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(&**self, &**other)
            }
        }

        impl<$($g)*> Hash for $W
        where
            $T: Hash,
        {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                Hash::hash(&**self, state)
            }
        }

        impl<$($g)*> fmt::Debug for $W
        where
            $T: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&**self, f)
            }
        }
    };
}

/// `W[i]`, read-only.
macro_rules! forward_index {
    ([$($g:tt)*] $W:ty: $T:ty) => {
        impl<$($g)* __I> Index<__I> for $W
        where
            $T: Index<__I>,
        {
            type Output = <$T as Index<__I>>::Output;

            #[inline]
            fn index(&self, index: __I) -> &Self::Output {
                Index::index(&**self, index)
            }
        }
    };
}

/// `W[i] = x`.
macro_rules! forward_index_mut {
    ([$($g:tt)*] $W:ty: $T:ty) => {
        impl<$($g)* __I> IndexMut<__I> for $W
        where
            $T: IndexMut<__I>,
        {
            #[inline]
            fn index_mut(&mut self, index: __I) -> &mut Self::Output {
                IndexMut::index_mut(&mut **self, index)
            }
        }
    };
}

/// `for x in &w` and `w.invoke(args)` for non-array wrappers.
macro_rules! forward_iter_call {
    ([$($g:tt)*] $W:ty: $T:ty) => {
        impl<'__w, $($g)*> IntoIterator for &'__w $W
        where
            &'__w $T: IntoIterator,
        {
            type Item = <&'__w $T as IntoIterator>::Item;
            type IntoIter = <&'__w $T as IntoIterator>::IntoIter;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                IntoIterator::into_iter(&**self)
            }
        }

        impl<$($g)* __A> Callable<__A> for $W
        where
            $T: Callable<__A>,
        {
            type Output = <$T as Callable<__A>>::Output;

            #[inline]
            fn invoke(&self, args: __A) -> Self::Output {
                Callable::invoke(&**self, args)
            }
        }
    };
}

// =============================================================================
// BoundedArray
// =============================================================================

forward_binary!(['a, T: 'a, const N: usize,] ArrayRef<'a, T, N> => &'a [T; N]);
forward_unary!(['a, T: 'a, const N: usize,] ArrayRef<'a, T, N> => &'a [T; N]);
forward_assign!(['a, T: 'a, const N: usize,] ArrayRef<'a, T, N>: [T; N]);
forward_compare!(['a, T: 'a, const N: usize,] ArrayRef<'a, T, N>: [T; N]);
forward_index!(['a, T: 'a, const N: usize,] ArrayRef<'a, T, N>: [T; N]);
forward_index_mut!(['a, T: 'a, const N: usize,] ArrayRef<'a, T, N>: [T; N]);

// =============================================================================
// ConstBoundedArray (read-only: no assignment, no IndexMut)
// =============================================================================

forward_binary!([T, const N: usize,] ArrayValue<T, N> => [T; N]);
forward_unary!([T, const N: usize,] ArrayValue<T, N> => [T; N]);
forward_compare!([T, const N: usize,] ArrayValue<T, N>: [T; N]);
forward_index!([T, const N: usize,] ArrayValue<T, N>: [T; N]);

// =============================================================================
// ScalarReference
// =============================================================================

forward_binary!(['a, T: 'a,] ScalarRef<'a, T> => &'a T);
forward_unary!(['a, T: 'a,] ScalarRef<'a, T> => &'a T);
forward_assign!(['a, T: 'a,] ScalarRef<'a, T>: T);
forward_compare!(['a, T: 'a,] ScalarRef<'a, T>: T);
forward_index!(['a, T: 'a,] ScalarRef<'a, T>: T);
forward_index_mut!(['a, T: 'a,] ScalarRef<'a, T>: T);
forward_iter_call!(['a, T: 'a,] ScalarRef<'a, T>: T);

// =============================================================================
// RecordReference
// =============================================================================

forward_binary!(['a, T: 'a,] RecordRef<'a, T> => &'a T);
forward_unary!(['a, T: 'a,] RecordRef<'a, T> => &'a T);
forward_assign!(['a, T: 'a,] RecordRef<'a, T>: T);
forward_compare!(['a, T: 'a,] RecordRef<'a, T>: T);
forward_index!(['a, T: 'a,] RecordRef<'a, T>: T);
forward_index_mut!(['a, T: 'a,] RecordRef<'a, T>: T);
forward_iter_call!(['a, T: 'a,] RecordRef<'a, T>: T);

// =============================================================================
// ScalarValue (no compound assignment)
// =============================================================================

forward_binary!([T,] ScalarValue<T> => T);
forward_unary!([T,] ScalarValue<T> => T);
forward_compare!([T,] ScalarValue<T>: T);
forward_index!([T,] ScalarValue<T>: T);
forward_index_mut!([T,] ScalarValue<T>: T);
forward_iter_call!([T,] ScalarValue<T>: T);

// =============================================================================
// RecordValue (no compound assignment)
// =============================================================================

forward_binary!([T,] RecordValue<T> => T);
forward_unary!([T,] RecordValue<T> => T);
forward_compare!([T,] RecordValue<T>: T);
forward_index!([T,] RecordValue<T>: T);
forward_index_mut!([T,] RecordValue<T>: T);
forward_iter_call!([T,] RecordValue<T>: T);
