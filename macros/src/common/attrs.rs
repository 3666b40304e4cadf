//! `#[capture(...)]` helper attribute parsing

use syn::{Attribute, Path};

/// Hooks a user type supplies through `#[capture(swap = path, address = path)]`.
#[derive(Default)]
pub struct CaptureAttrs {
    /// `fn(&mut T, &mut T)` used instead of `core::mem::swap`.
    pub swap: Option<Path>,
    /// `fn(&T) -> *const T` reported as the address of an owned copy.
    pub address: Option<Path>,
}

impl CaptureAttrs {
    /// Collect every `#[capture(...)]` attribute on an item.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = CaptureAttrs::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("capture")) {
            attr.parse_nested_meta(|meta| {
                let slot = if meta.path.is_ident("swap") {
                    &mut out.swap
                } else if meta.path.is_ident("address") {
                    &mut out.address
                } else {
                    return Err(meta.error("unknown capture hook, expected `swap` or `address`"));
                };

                if slot.is_some() {
                    return Err(meta.error("capture hook given more than once"));
                }
                *slot = Some(meta.value()?.parse()?);
                Ok(())
            })?;
        }

        Ok(out)
    }
}
