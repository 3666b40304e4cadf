//! Member pointers and their application.
//!
//! A member pointer is a field accessor ([`Field`], built by
//! [`member!`](crate::member)) or a method ([`Method`], built by
//! [`method!`](crate::method)). Either side of an application may be
//! wrapped:
//!
//! ```text
//! plain receiver,   plain member     apply_member(&p, m)
//! plain receiver,   wrapped member   apply_member(&p, capture(m))
//! wrapped receiver, plain member     w.apply_member(m)
//! wrapped receiver, wrapped member   w.apply_member(capture(m))
//! ```
//!
//! Application is lazy: the result is a [`BoundMember`], evaluated by
//! [`BoundMember::invoke`].

use core::fmt;
use core::marker::PhantomData;

use super::call::Callable;
use crate::classify::builtin::impl_plain;
use crate::facade::{Captured, ScalarRef, ScalarValue};

/// A member of `R` that can be applied to a receiver with arguments `Args`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a member of `{R}` taking `{Args}`",
    label = "not applicable to this receiver",
    note = "build member pointers with `member!(Type, field)` or `method!(Type, name)`"
)]
pub trait MemberPtr<'r, R: ?Sized + 'r, Args> {
    type Output;

    fn apply(&self, receiver: &'r R, args: Args) -> Self::Output;
}

// =============================================================================
// Field
// =============================================================================

/// Accessor for a field of type `F` inside `R`.
pub struct Field<R: ?Sized, F: ?Sized> {
    get: fn(&R) -> &F,
}

impl<R: ?Sized, F: ?Sized> Field<R, F> {
    #[inline]
    pub const fn new(get: fn(&R) -> &F) -> Self {
        Self { get }
    }

    /// Read the field out of `receiver`.
    #[inline]
    pub fn read<'r>(&self, receiver: &'r R) -> &'r F {
        (self.get)(receiver)
    }
}

impl<R: ?Sized, F: ?Sized> Clone for Field<R, F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized, F: ?Sized> Copy for Field<R, F> {}

impl<R: ?Sized, F: ?Sized> fmt::Debug for Field<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("receiver", &core::any::type_name::<R>())
            .field("field", &core::any::type_name::<F>())
            .finish()
    }
}

impl<'r, R: ?Sized + 'r, F: ?Sized + 'r> MemberPtr<'r, R, ()> for Field<R, F> {
    type Output = &'r F;

    #[inline]
    fn apply(&self, receiver: &'r R, (): ()) -> &'r F {
        self.read(receiver)
    }
}

// =============================================================================
// Method
// =============================================================================

/// A callable taking `&R` as its first argument.
pub struct Method<R: ?Sized, F> {
    f: F,
    _receiver: PhantomData<fn(&R)>,
}

impl<R: ?Sized, F> Method<R, F> {
    #[inline]
    pub const fn new(f: F) -> Self {
        Self {
            f,
            _receiver: PhantomData,
        }
    }

    #[inline]
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<R: ?Sized, F: Clone> Clone for Method<R, F> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.f.clone())
    }
}

impl<R: ?Sized, F: Copy> Copy for Method<R, F> {}

impl<R: ?Sized, F> fmt::Debug for Method<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("receiver", &core::any::type_name::<R>())
            .field("f", &core::any::type_name::<F>())
            .finish()
    }
}

macro_rules! impl_method {
    ($($A:ident $a:ident),*) => {
        impl<'r, R: ?Sized + 'r, F, O, $($A,)*> MemberPtr<'r, R, ($($A,)*)> for Method<R, F>
        where
            F: Fn(&'r R, $($A),*) -> O,
        {
            type Output = O;

            #[inline]
            fn apply(&self, receiver: &'r R, ($($a,)*): ($($A,)*)) -> O {
                (self.f)(receiver, $($a),*)
            }
        }
    };
}

impl_method!();
impl_method!(A1 a1);
impl_method!(A1 a1, A2 a2);
impl_method!(A1 a1, A2 a2, A3 a3);
impl_method!(A1 a1, A2 a2, A3 a3, A4 a4);

impl_plain!(scalar: [R: ?Sized, F: ?Sized] Field<R, F>);
impl_plain!(scalar: [R: ?Sized, F] Method<R, F>);

// =============================================================================
// Wrapped members
// =============================================================================

impl<'r, R: ?Sized + 'r, Args, M> MemberPtr<'r, R, Args> for ScalarValue<M>
where
    M: MemberPtr<'r, R, Args>,
{
    type Output = M::Output;

    #[inline]
    fn apply(&self, receiver: &'r R, args: Args) -> M::Output {
        MemberPtr::apply(&**self, receiver, args)
    }
}

impl<'r, R: ?Sized + 'r, Args, M> MemberPtr<'r, R, Args> for ScalarRef<'_, M>
where
    M: MemberPtr<'r, R, Args>,
{
    type Output = M::Output;

    #[inline]
    fn apply(&self, receiver: &'r R, args: Args) -> M::Output {
        MemberPtr::apply(&**self, receiver, args)
    }
}

impl<'r, R: ?Sized + 'r, Args, M> MemberPtr<'r, R, Args> for &M
where
    M: MemberPtr<'r, R, Args> + ?Sized,
{
    type Output = M::Output;

    #[inline]
    fn apply(&self, receiver: &'r R, args: Args) -> M::Output {
        MemberPtr::apply(&**self, receiver, args)
    }
}

// =============================================================================
// Application
// =============================================================================

/// A member paired with its receiver, ready to be invoked.
pub struct BoundMember<'r, R: ?Sized, M> {
    receiver: &'r R,
    member: M,
}

impl<'r, R: ?Sized, M> BoundMember<'r, R, M> {
    #[inline]
    pub fn new(receiver: &'r R, member: M) -> Self {
        Self { receiver, member }
    }

    #[inline]
    pub fn receiver(&self) -> &'r R {
        self.receiver
    }

    #[inline]
    pub fn member(&self) -> &M {
        &self.member
    }

    /// Apply the member to the receiver.
    #[inline]
    pub fn invoke<Args>(&self, args: Args) -> M::Output
    where
        M: MemberPtr<'r, R, Args>,
    {
        self.member.apply(self.receiver, args)
    }
}

impl<'r, R: ?Sized, M, Args> Callable<Args> for BoundMember<'r, R, M>
where
    M: MemberPtr<'r, R, Args>,
{
    type Output = M::Output;

    #[inline]
    fn invoke(&self, args: Args) -> M::Output {
        self.member.apply(self.receiver, args)
    }
}

/// Bind `member` to a plain receiver.
#[inline]
pub fn apply_member<'r, R: ?Sized, M>(receiver: &'r R, member: M) -> BoundMember<'r, R, M> {
    BoundMember::new(receiver, member)
}

/// Bind members to the entity behind a wrapper.
pub trait MemberReceiver: Captured {
    #[inline]
    fn apply_member<M>(&self, member: M) -> BoundMember<'_, Self::Target, M> {
        BoundMember::new(self.entity(), member)
    }
}

impl<W: Captured> MemberReceiver for W {}
