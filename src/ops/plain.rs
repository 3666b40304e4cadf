//! Plain values on the left of a forwarded operator.
//!
//! `5 + w` cannot go through a blanket impl on the right-hand side, so each
//! primitive gets explicit impls against the scalar and record wrappers.
//! Array wrappers are left out; a primitive never combines with an array.

use core::cmp::Ordering;
use core::time::Duration;

use super::operand::Operand;
use crate::facade::{RecordRef, RecordValue, ScalarRef, ScalarValue};

macro_rules! plain_left {
    ($($P:ty),+ $(,)?) => {
        $( plain_left!(@wrappers $P); )+
    };
    (@wrappers $P:ty) => {
        plain_left!(@ops [T,] $P, ScalarValue<T>);
        plain_left!(@ops ['a, T: 'a,] $P, ScalarRef<'a, T>);
        plain_left!(@ops [T,] $P, RecordValue<T>);
        plain_left!(@ops ['a, T: 'a,] $P, RecordRef<'a, T>);
    };
    (@ops [$($g:tt)*] $P:ty, $W:ty) => {
        plain_left!(@binary [$($g)*] $P, $W;
            Add add, Sub sub, Mul mul, Div div, Rem rem,
            BitAnd bitand, BitOr bitor, BitXor bitxor, Shl shl, Shr shr);

        impl<$($g)*> PartialEq<$W> for $P
        where
            $P: PartialEq<<$W as Operand>::Target>,
        {
            #[inline]
            fn eq(&self, other: &$W) -> bool {
                PartialEq::eq(self, other.target())
            }
        }

        impl<$($g)*> PartialOrd<$W> for $P
        where
            $P: PartialOrd<<$W as Operand>::Target>,
        {
            #[inline]
            fn partial_cmp(&self, other: &$W) -> Option<Ordering> {
                PartialOrd::partial_cmp(self, other.target())
            }
        }
    };
    (@binary $gg:tt $P:ty, $W:ty; $($Op:ident $method:ident),+) => {
        $( plain_left!(@one $gg $P, $W; $Op $method); )+
    };
    (@one [$($g:tt)*] $P:ty, $W:ty; $Op:ident $method:ident) => {
        impl<$($g)*> core::ops::$Op<$W> for $P
        where
            $P: core::ops::$Op<<$W as Operand>::Value>,
        {
            type Output = <$P as core::ops::$Op<<$W as Operand>::Value>>::Output;

            #[inline]
            fn $method(self, rhs: $W) -> Self::Output {
                core::ops::$Op::$method(self, rhs.into_value())
            }
        }
    };
}

plain_left!(
    bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    Duration,
);
