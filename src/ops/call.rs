//! Calling through a wrapper.
//!
//! `Fn` cannot be implemented on stable, so calls go through `Callable`,
//! which takes its arguments as a tuple. Every `Fn` closure and function
//! pointer is `Callable`; wrappers forward it to the captured type.

/// A value that can be called with the argument tuple `Args`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with arguments `{Args}`",
    label = "not callable with these arguments",
    note = "arguments are passed as a tuple: `w.invoke((a, b))`"
)]
pub trait Callable<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($A:ident $a:ident),*) => {
        impl<__F, __O, $($A,)*> Callable<($($A,)*)> for __F
        where
            __F: Fn($($A),*) -> __O,
        {
            type Output = __O;

            #[inline]
            #[allow(clippy::unused_unit)]
            fn invoke(&self, ($($a,)*): ($($A,)*)) -> __O {
                self($($a),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A1 a1);
impl_callable!(A1 a1, A2 a2);
impl_callable!(A1 a1, A2 a2, A3 a3);
impl_callable!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_callable!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_callable!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
