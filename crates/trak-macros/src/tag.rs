//! Type tag derivation

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Path;

/// Sixteen hex digits of `tag` as `TagDigit<X.., TagDigit<.., TagEnd>>`,
/// most significant digit outermost.
pub(crate) fn tag_type(krate: &Path, tag: u64) -> TokenStream {
    let mut ty = quote! { #krate::tag::TagEnd };
    for shift in 0..16 {
        let digit = format_ident!("X{:X}", (tag >> (shift * 4)) & 0xf);
        ty = quote! { #krate::tag::TagDigit<#krate::tag::#digit, #ty> };
    }
    ty
}

/// The tag of a derived participant, hashed at the definition site from
/// `module_path!()` and `signature` so same-named types in different
/// modules do not collide. Same digit order as [`tag_type`].
pub(crate) fn derived_tag_type(krate: &Path, signature: &str) -> TokenStream {
    let hash = quote! {
        #krate::tag::fingerprint(::core::concat!(::core::module_path!(), "::", #signature))
    };
    let mut ty = quote! { #krate::tag::TagEnd };
    for index in 0u32..16 {
        ty = quote! {
            #krate::tag::TagDigit<
                <#krate::tag::Hex<{ #krate::tag::nibble(#hash, #index) }> as #krate::tag::HexDigit>::Nibble,
                #ty
            >
        };
    }
    ty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_type_puts_high_digit_outermost() {
        let krate: Path = syn::parse_quote!(::trak_core);
        let rendered = tag_type(&krate, 0xa000_0000_0000_0001).to_string();
        let first = rendered.find("XA").unwrap();
        let last = rendered.rfind("X1").unwrap();
        assert!(first < last);
        assert_eq!(rendered.matches("TagDigit").count(), 16);
        assert_eq!(rendered.matches("X0").count(), 14);
    }

    #[test]
    fn derived_tag_hashes_module_path() {
        let krate: Path = syn::parse_quote!(::trak_core);
        let rendered = derived_tag_type(&krate, "Perm|u32").to_string();
        assert_eq!(rendered.matches("module_path").count(), 16);
        assert_eq!(rendered.matches("\"Perm|u32\"").count(), 16);
        assert!(rendered.contains("nibble"));
        assert!(rendered.contains("15u32"));
        assert!(!rendered.contains("16u32"));
    }
}
