//! Uniform operand view over wrappers and plain values.

use crate::facade::{ArrayRef, ArrayValue, Captured, RecordRef, RecordValue, ScalarRef, ScalarValue};

/// Anything that can stand on either side of a forwarded operator.
///
/// `Target` is what comparisons look at (by reference). `Value` is what
/// value-consuming operators receive: alias wrappers yield a shared borrow
/// of the original, value wrappers yield their copy, plain values yield
/// themselves.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a forwarded operand",
    label = "not a capture wrapper or a capturable value",
    note = "plain operands must be capturable; derive `Record` or `Scalar` for user types"
)]
pub trait Operand {
    type Target: ?Sized;
    type Value;

    fn target(&self) -> &Self::Target;
    fn into_value(self) -> Self::Value;
}

impl<'a, T, const N: usize> Operand for ArrayRef<'a, T, N> {
    type Target = [T; N];
    type Value = &'a [T; N];

    #[inline]
    fn target(&self) -> &[T; N] {
        self.entity()
    }

    #[inline]
    fn into_value(self) -> &'a [T; N] {
        self.readback()
    }
}

impl<T, const N: usize> Operand for ArrayValue<T, N> {
    type Target = [T; N];
    type Value = [T; N];

    #[inline]
    fn target(&self) -> &[T; N] {
        self.entity()
    }

    #[inline]
    fn into_value(self) -> [T; N] {
        self.into_array()
    }
}

impl<'a, T> Operand for ScalarRef<'a, T> {
    type Target = T;
    type Value = &'a T;

    #[inline]
    fn target(&self) -> &T {
        self.entity()
    }

    #[inline]
    fn into_value(self) -> &'a T {
        self.readback()
    }
}

impl<T> Operand for ScalarValue<T> {
    type Target = T;
    type Value = T;

    #[inline]
    fn target(&self) -> &T {
        self
    }

    #[inline]
    fn into_value(self) -> T {
        self.into_inner()
    }
}

impl<'a, T> Operand for RecordRef<'a, T> {
    type Target = T;
    type Value = &'a T;

    #[inline]
    fn target(&self) -> &T {
        self.entity()
    }

    #[inline]
    fn into_value(self) -> &'a T {
        self.readback()
    }
}

impl<T> Operand for RecordValue<T> {
    type Target = T;
    type Value = T;

    #[inline]
    fn target(&self) -> &T {
        self
    }

    #[inline]
    fn into_value(self) -> T {
        self.into_inner()
    }
}
