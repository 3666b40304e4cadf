//! Shape tags.
//!
//! One zero-sized tag per storage strategy. Each tag carries its properties
//! at the type level (`Alias`, `Array`, `Mutable`) and as a runtime
//! [`ShapeTag`] for reflection.

use crate::primitives::{Bool, SelectBool};

/// Runtime mirror of the six capture strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    /// Mutable fixed-size array, captured by alias.
    BoundedArray,
    /// Constant fixed-size array, copied element by element.
    ConstBoundedArray,
    /// Mutable non-record entity, captured by alias.
    ScalarReference,
    /// Mutable record, captured by alias.
    RecordReference,
    /// Scalar, pointer, enum or function pointer, copied.
    ScalarValue,
    /// Record, copied; the wrapper is the copy.
    RecordValue,
}

impl ShapeTag {
    pub const ALL: [ShapeTag; 6] = [
        ShapeTag::BoundedArray,
        ShapeTag::ConstBoundedArray,
        ShapeTag::ScalarReference,
        ShapeTag::RecordReference,
        ShapeTag::ScalarValue,
        ShapeTag::RecordValue,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeTag::BoundedArray => "BoundedArray",
            ShapeTag::ConstBoundedArray => "ConstBoundedArray",
            ShapeTag::ScalarReference => "ScalarReference",
            ShapeTag::RecordReference => "RecordReference",
            ShapeTag::ScalarValue => "ScalarValue",
            ShapeTag::RecordValue => "RecordValue",
        }
    }

    /// Whether the wrapper aliases caller storage instead of owning a copy.
    pub const fn is_alias(self) -> bool {
        matches!(
            self,
            ShapeTag::BoundedArray | ShapeTag::ScalarReference | ShapeTag::RecordReference
        )
    }

    pub const fn is_array(self) -> bool {
        matches!(self, ShapeTag::BoundedArray | ShapeTag::ConstBoundedArray)
    }

    /// Whether compound assignment is forwarded through the wrapper.
    pub const fn is_mutable(self) -> bool {
        self.is_alias()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A storage strategy.
///
/// Sealed: the six tags in this module are the only shapes.
pub trait Shape: sealed::Sealed + Copy + 'static {
    const TAG: ShapeTag;
    const NAME: &'static str = Self::TAG.name();

    /// `Present` if the wrapper aliases caller storage.
    type Alias: Bool;
    /// `Present` for the two array strategies.
    type Array: Bool;
    /// `Present` if compound assignment is forwarded.
    type Mutable: Bool;
}

// Type-level flags are derived from the runtime tag so the two cannot drift.
macro_rules! define_shape {
    ($(#[$meta:meta])* $Name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $Name;

        impl sealed::Sealed for $Name {}

        impl Shape for $Name {
            const TAG: ShapeTag = ShapeTag::$Name;
            type Alias = <() as SelectBool<{ ShapeTag::$Name.is_alias() }>>::Out;
            type Array = <() as SelectBool<{ ShapeTag::$Name.is_array() }>>::Out;
            type Mutable = <() as SelectBool<{ ShapeTag::$Name.is_mutable() }>>::Out;
        }
    };
}

define_shape! {
    /// `&mut [T; N]`, wrapped by [`ArrayRef`](crate::ArrayRef).
    BoundedArray
}

define_shape! {
    /// `[T; N]` or `&[T; N]`, wrapped by [`ArrayValue`](crate::ArrayValue).
    ConstBoundedArray
}

define_shape! {
    /// `&mut T` for scalar `T`, wrapped by [`ScalarRef`](crate::ScalarRef).
    ScalarReference
}

define_shape! {
    /// `&mut T` for record `T`, wrapped by [`RecordRef`](crate::RecordRef).
    RecordReference
}

define_shape! {
    /// Everything else, wrapped by [`ScalarValue`](crate::ScalarValue).
    ScalarValue
}

define_shape! {
    /// Record by value, wrapped by [`RecordValue`](crate::RecordValue).
    RecordValue
}
