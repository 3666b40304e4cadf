//! # Layer 4: Accessors
//!
//! Utilities over captured types and wrappers:
//!
//! - [`ExtractType`]: the exact captured type of a wrapper.
//! - [`Simplified`]: the canonical form of a type.
//! - [`swap`] / [`swap_value`]: exchange captured entities.
//! - [`promote`]: force the alias strategy.

pub mod simplify;
pub mod swap;

pub use simplify::{Simplified, Simplify};
pub use swap::{Swap, SwapValue, swap, swap_value};

use crate::classify::{AliasStrategy, Shaped};
use crate::facade::Captured;

/// Exact type captured by wrapper `W`, reference qualification included.
///
/// ```
/// use uni_capture::{CaptureOf, ExtractType, assert_same};
///
/// assert_same::<ExtractType<CaptureOf<&'static mut i32>>, &'static mut i32>();
/// assert_same::<ExtractType<CaptureOf<[u8; 2]>>, [u8; 2]>();
/// ```
pub type ExtractType<W> = <W as Captured>::Type;

/// Capture `target` by alias, whatever its kind.
///
/// Unlike [`capture`](crate::capture), which takes the input as given,
/// `promote` always yields an alias wrapper: a scalar becomes a
/// `ScalarRef`, a record a `RecordRef`, an array an `ArrayRef`.
///
/// ```
/// use uni_capture::promote;
///
/// let mut items = [1u8, 2, 3];
/// let mut w = promote(&mut items);
/// w[0] = 9;
/// assert_eq!(items, [9, 2, 3]);
/// ```
#[inline]
pub fn promote<'a, T>(target: &'a mut T) -> <T::Kind as AliasStrategy<'a, T>>::Wrapper
where
    T: Shaped + 'a,
    T::Kind: AliasStrategy<'a, T>,
{
    <T::Kind as AliasStrategy<'a, T>>::alias(target)
}
