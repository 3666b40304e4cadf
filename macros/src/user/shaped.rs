//! `#[derive(Record)]` and `#[derive(Scalar)]`
//!
//! Both derives make a user type capturable by value. They differ only in
//! the kind they assign, which decides the wrapper:
//!
//! | Derive | Kind | By value | Through `&mut` |
//! |--------|------|----------|----------------|
//! | `Record` | `RecordKind` | `RecordValue<T>` | `RecordRef<'a, T>` |
//! | `Scalar` | `ScalarKind` | `ScalarValue<T>` | `ScalarRef<'a, T>` |

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput};

use crate::common::CaptureAttrs;

/// Which derive is being expanded.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Record,
    Scalar,
}

impl ShapeKind {
    fn derive_name(self) -> &'static str {
        match self {
            ShapeKind::Record => "Record",
            ShapeKind::Scalar => "Scalar",
        }
    }
}

pub fn expand_derive_shaped(input: DeriveInput, kind: ShapeKind) -> TokenStream2 {
    match expand(&input, kind) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn expand(input: &DeriveInput, kind: ShapeKind) -> syn::Result<TokenStream2> {
    match (&input.data, kind) {
        (Data::Union(_), _) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("{} cannot be derived for unions", kind.derive_name()),
            ));
        }
        (Data::Enum(_), ShapeKind::Record) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record can only be derived for structs; derive Scalar for enums",
            ));
        }
        _ => {}
    }

    let hooks = CaptureAttrs::from_attrs(&input.attrs)?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let (kind_ty, wrapper) = match kind {
        ShapeKind::Record => (quote!(RecordKind), quote!(RecordValue)),
        ShapeKind::Scalar => (quote!(ScalarKind), quote!(ScalarValue)),
    };

    let swap_fn = hooks.swap.map(|path| {
        quote! {
            #[inline]
            fn swap(a: &mut Self, b: &mut Self) {
                #path(a, b)
            }
        }
    });

    let address_fn = hooks.address.map(|path| {
        quote! {
            #[inline]
            fn address(this: &Self) -> *const Self {
                #path(this)
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::uni_capture::Shaped for #name #ty_generics #where_clause {
            type Kind = ::uni_capture::#kind_ty;
            #swap_fn
            #address_fn
        }

        impl #impl_generics ::uni_capture::Capture for #name #ty_generics #where_clause {
            type Shape = ::uni_capture::shape::#wrapper;
            type Wrapper = ::uni_capture::#wrapper<Self>;

            #[inline]
            fn capture(self) -> Self::Wrapper {
                ::uni_capture::#wrapper::new(self)
            }
        }

        impl #impl_generics ::uni_capture::Operand for #name #ty_generics #where_clause {
            type Target = Self;
            type Value = Self;

            #[inline]
            fn target(&self) -> &Self {
                self
            }

            #[inline]
            fn into_value(self) -> Self {
                self
            }
        }

        impl #impl_generics ::uni_capture::Simplify for #name #ty_generics #where_clause {
            type Out = Self;
        }
    })
}
