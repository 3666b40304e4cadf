// Common utilities shared between the derive and function-like macros
//
// This module contains:
// - attrs: `#[capture(...)]` hook parsing

mod attrs;

pub use attrs::*;
