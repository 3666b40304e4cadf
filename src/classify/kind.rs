//! Kinds and the `Shaped` trait.
//!
//! A kind is the static category of a type as far as capture is concerned:
//! scalar, record or array. References are classified by the kind of the
//! type they point at.

mod sealed {
    pub trait Sealed {}
}

/// Static category of a capturable type.
pub trait Kind: sealed::Sealed + 'static {
    const NAME: &'static str;
}

/// Non-record entities: numbers, `bool`, `char`, pointers, references,
/// function pointers, enums marked with `#[derive(Scalar)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScalarKind;

/// Structs marked with `#[derive(Record)]` and owning std containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RecordKind;

/// Fixed-size arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrayKind;

impl sealed::Sealed for ScalarKind {}
impl sealed::Sealed for RecordKind {}
impl sealed::Sealed for ArrayKind {}

impl Kind for ScalarKind {
    const NAME: &'static str = "scalar";
}

impl Kind for RecordKind {
    const NAME: &'static str = "record";
}

impl Kind for ArrayKind {
    const NAME: &'static str = "array";
}

/// A type the classifier knows how to capture.
///
/// Besides the kind, a type may override the swap and address-of hooks used
/// by the accessors. `#[derive(Record)]` and `#[derive(Scalar)]` accept
/// `#[capture(swap = path, address = path)]` for that.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no capture shape",
    label = "unsupported capture shape",
    note = "derive `Record` for structs or `Scalar` for enums and newtypes to make them capturable"
)]
pub trait Shaped {
    type Kind: Kind;

    /// Exchange two values of this type.
    #[inline]
    fn swap(a: &mut Self, b: &mut Self)
    where
        Self: Sized,
    {
        core::mem::swap(a, b)
    }

    /// Address reported for an owned copy of this type.
    #[inline]
    fn address(this: &Self) -> *const Self {
        this
    }
}

/// Kind of a capturable type.
pub type KindOf<T> = <T as Shaped>::Kind;
