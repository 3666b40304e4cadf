//! # Layer 2: Capture Facade
//!
//! One wrapper per strategy. Alias wrappers hold a `&'a mut` borrow of the
//! caller's entity; value wrappers own their copy.
//!
//! ```text
//! alias:  ArrayRef<'a, T, N>   ScalarRef<'a, T>   RecordRef<'a, T>
//! value:  ArrayValue<T, N>     ScalarValue<T>     RecordValue<T>
//! ```
//!
//! Every wrapper dereferences to the captured entity and implements
//! [`Captured`].

pub mod array;
pub mod record;
pub mod scalar;
mod storage;

pub use array::{ArrayRef, ArrayValue};
pub use record::{RecordRef, RecordValue};
pub use scalar::{ScalarRef, ScalarValue};

use crate::classify::{Shape, ShapeTag};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Common surface of the six wrappers.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a capture wrapper",
    label = "expected a wrapper produced by `capture`"
)]
pub trait Captured: sealed::Sealed {
    /// Strategy this wrapper implements.
    type Shape: Shape;
    /// Exact captured type, reference qualification included.
    type Type;
    /// Entity operations are forwarded to.
    type Target;

    /// Borrow the captured entity.
    fn entity(&self) -> &Self::Target;

    /// Give back the captured type: the original borrow for aliases, the
    /// owned copy for values.
    fn readback(self) -> Self::Type;

    /// Address of the entity: the caller's storage for aliases, the
    /// wrapper's own storage for values.
    #[inline]
    fn address_of(&self) -> *const Self::Target {
        self.entity()
    }

    #[inline]
    fn shape(&self) -> ShapeTag {
        <Self::Shape as Shape>::TAG
    }
}
