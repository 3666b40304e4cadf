//! Procedural macros for the uni-capture adapter
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Record)]` | struct | Capture by value into `RecordValue` |
//! | `#[derive(Scalar)]` | struct/enum | Capture by value into `ScalarValue` |
//! | `capture!` | expression | Capture, keeping string literals as byte arrays |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Record)]
//! #[capture(swap = swap_gauges)]
//! struct Gauge { val: i32 }
//!
//! let copy = capture!(Gauge { val: 6 });
//! let text = capture!("foobar"); // ArrayValue<u8, 6>
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

use user::ShapeKind;

// =============================================================================
// Derives
// =============================================================================

/// Make a struct capturable as a record.
///
/// By value it is captured into `RecordValue<Self>`, through `&mut` into
/// `RecordRef`.
///
/// # Hooks
///
/// - `#[capture(swap = path)]`: `fn(&mut Self, &mut Self)` used by `swap`
///   and `swap_value` instead of `core::mem::swap`.
/// - `#[capture(address = path)]`: `fn(&Self) -> *const Self` reported by
///   `address_of` on a `RecordValue`.
#[proc_macro_derive(Record, attributes(capture))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_shaped(input, ShapeKind::Record).into()
}

/// Make a type capturable as a scalar.
///
/// Meant for enums and newtypes: by value they are captured into
/// `ScalarValue<Self>`, through `&mut` into `ScalarRef`. Accepts the same
/// `#[capture(...)]` hooks as `Record`.
#[proc_macro_derive(Scalar, attributes(capture))]
pub fn derive_scalar(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_shaped(input, ShapeKind::Scalar).into()
}

// =============================================================================
// Function-like
// =============================================================================

/// Capture an expression.
///
/// Equivalent to `uni_capture::capture(expr)`, except that string and byte
/// string literals become `ArrayValue<u8, LEN>` of their bytes.
///
/// ```ignore
/// let w = capture!("foobar");
/// assert_eq!(w[3], b'b');
/// ```
#[proc_macro]
pub fn capture(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as syn::Expr);
    user::expand_capture(expr).into()
}
