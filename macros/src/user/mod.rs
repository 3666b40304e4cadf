//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Record)]` | on struct | Capture as a record |
//! | `#[derive(Scalar)]` | on struct/enum | Capture as a scalar |
//! | `capture!` | function macro | Capture, keeping string literals as arrays |

mod capture;
mod shaped;

pub use capture::expand_capture;
pub use shaped::{ShapeKind, expand_derive_shaped};
