//! Type equality witness.
//!
//! `A: Same<B>` holds only when `A` and `B` are the same type. Used to state
//! equality constraints over extracted and simplified capture types.

/// Implemented only for `T: Same<T>`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` and `{T}` are different types",
    label = "expected `{T}`"
)]
pub trait Same<T: ?Sized> {}

impl<T: ?Sized> Same<T> for T {}

/// Compile-time assertion that `A` and `B` are the same type.
///
/// ```
/// use uni_capture::primitives::assert_same;
///
/// assert_same::<u8, u8>();
/// ```
///
/// ```compile_fail
/// use uni_capture::primitives::assert_same;
///
/// assert_same::<u8, u16>();
/// ```
pub const fn assert_same<A, B>()
where
    A: ?Sized + Same<B>,
    B: ?Sized,
{
}
