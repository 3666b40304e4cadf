//! Member pointer syntax.
//!
//! Rust has no `&Type::field` pointer-to-member. These macros build the
//! equivalent [`Field`](crate::Field) and [`Method`](crate::Method) values.

// =============================================================================
// member! - field accessor
// =============================================================================

/// Build a [`Field`](crate::Field) accessor for `Type::field`.
///
/// # Example
///
/// ```
/// use uni_capture::{apply_member, member};
///
/// struct Point { x: i32, y: i32 }
///
/// let p = Point { x: 1, y: 2 };
/// let y = member!(Point, y);
/// assert_eq!(*apply_member(&p, y).invoke(()), 2);
/// # let _ = p.x;
/// ```
///
/// Tuple fields use their index: `member!(Pair, 0)`.
#[macro_export]
macro_rules! member {
    ($T:ty, $field:tt) => {
        $crate::Field::<$T, _>::new(|receiver: &$T| &receiver.$field)
    };
}

// =============================================================================
// method! - method accessor
// =============================================================================

/// Build a [`Method`](crate::Method) for `Type::name`, a method taking
/// `&self`.
///
/// # Example
///
/// ```
/// use uni_capture::{capture, method, MemberReceiver, Record};
///
/// #[derive(Record)]
/// struct Counter { hits: u32 }
///
/// impl Counter {
///     fn plus(&self, n: u32) -> u32 { self.hits + n }
/// }
///
/// let mut c = Counter { hits: 3 };
/// let w = capture(&mut c);
/// assert_eq!(w.apply_member(method!(Counter, plus)).invoke((4,)), 7);
/// ```
#[macro_export]
macro_rules! method {
    ($T:ty, $name:ident) => {
        $crate::Method::<$T, _>::new(<$T>::$name)
    };
}
