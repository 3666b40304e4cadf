//! `capture!(expr)`
//!
//! Same as calling `capture(expr)`, except that a string literal is seen
//! for what it is: a constant byte array. `capture!("foo")` produces an
//! `ArrayValue<u8, 3>` holding the UTF-8 bytes, no trailing NUL. Once a
//! literal has decayed to `&str` its length is no longer part of the type,
//! so the function form can only capture it as a pointer.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Expr, ExprLit, Lit, LitByteStr};

pub fn expand_capture(expr: Expr) -> TokenStream2 {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => {
            let bytes = LitByteStr::new(s.value().as_bytes(), s.span());
            quote! { ::uni_capture::ArrayValue::new(*#bytes) }
        }
        Expr::Lit(ExprLit { lit: Lit::ByteStr(b), .. }) => {
            quote! { ::uni_capture::ArrayValue::new(*#b) }
        }
        Expr::Paren(inner) => expand_capture(*inner.expr),
        Expr::Group(inner) => expand_capture(*inner.expr),
        other => quote! { ::uni_capture::Capture::capture(#other) },
    }
}
