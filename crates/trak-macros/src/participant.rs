//! Participant derive implementation

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    ext::IdentExt, parse::Parse, parse::ParseStream, punctuated::Punctuated, Attribute, Data,
    DeriveInput, Fields, Ident, Path, Result, Token, Type,
};

use crate::tag;

const INTEGER_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize",
];

struct ParticipantArgs {
    tag: Option<u64>,
    krate: Path,
}

impl ParticipantArgs {
    fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = ParticipantArgs {
            tag: None,
            krate: syn::parse_quote!(::trak_core),
        };

        for attr in attrs {
            if !attr.path().is_ident("participant") {
                continue;
            }
            let meta = attr.parse_args_with(ParticipantMeta::parse)?;
            for item in meta.items {
                match (item.key.to_string().as_str(), item.value) {
                    ("tag", syn::Lit::Int(value)) => args.tag = Some(value.base10_parse()?),
                    ("crate", syn::Lit::Str(value)) => args.krate = value.parse()?,
                    ("tag", other) => {
                        return Err(syn::Error::new(
                            other.span(),
                            "participant `tag` must be an integer literal",
                        ))
                    }
                    ("crate", other) => {
                        return Err(syn::Error::new(
                            other.span(),
                            "participant `crate` must be a string literal, e.g. crate = \"::trak_core\"",
                        ))
                    }
                    (other, _) => {
                        return Err(syn::Error::new(
                            item.key.span(),
                            format!("unknown participant attribute key: {other}"),
                        ))
                    }
                }
            }
        }

        Ok(args)
    }
}

struct ParticipantMeta {
    items: Vec<ParticipantMetaItem>,
}

struct ParticipantMetaItem {
    key: Ident,
    value: syn::Lit,
}

impl Parse for ParticipantMeta {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut items = Vec::new();
        while !input.is_empty() {
            // `crate` is a keyword, so plain `Ident` parsing would reject it
            let key = input.call(Ident::parse_any)?;
            input.parse::<Token![=]>()?;
            let value: syn::Lit = input.parse()?;
            items.push(ParticipantMetaItem { key, value });
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(Self { items })
    }
}

/// How the derived type maps to and from its integer.
struct Shape {
    repr: Type,
    to_repr: TokenStream,
    from_repr: TokenStream,
    signature: String,
}

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Participant cannot be derived for generic types",
        ));
    }

    let args = ParticipantArgs::from_attrs(&input.attrs)?;
    let name = &input.ident;
    let shape = match &input.data {
        Data::Enum(data) => enum_shape(input, data)?,
        Data::Struct(data) => struct_shape(input, &data.fields)?,
        Data::Union(_) => {
            return Err(syn::Error::new(
                Span::call_site(),
                "Participant can only be derived for enums and single-field structs",
            ))
        }
    };

    let krate = &args.krate;
    let repr = &shape.repr;
    let to_repr = &shape.to_repr;
    let from_repr = &shape.from_repr;
    let name_str = name.to_string();
    let tag_ty = match args.tag {
        Some(value) => tag::tag_type(krate, value),
        None => tag::derived_tag_type(krate, &format!("{name}|{}", shape.signature)),
    };

    let mut expanded = quote! {
        impl #krate::Participant for #name {
            type Repr = #repr;
            type Tag = #tag_ty;
            const NAME: &'static str = #name_str;

            #[inline]
            fn to_repr(self) -> #repr {
                #to_repr
            }

            #[inline]
            fn from_repr(repr: #repr) -> ::core::option::Option<Self> {
                #from_repr
            }
        }
    };

    for shared in [quote!(SharedEnum), quote!(SharedBitfield)] {
        expanded.extend(quote! {
            impl<L> ::core::cmp::PartialEq<#krate::#shared<L>> for #name
            where
                L: #krate::ParticipantList<Repr = #repr>
                    + #krate::Contains<#name, Output = #krate::logic::True>,
            {
                fn eq(&self, other: &#krate::#shared<L>) -> bool {
                    #krate::Participant::to_repr(*self) == other.raw()
                }
            }

            impl<L> ::core::cmp::PartialEq<#name> for #krate::#shared<L>
            where
                L: #krate::ParticipantList<Repr = #repr>
                    + #krate::Contains<#name, Output = #krate::logic::True>,
            {
                fn eq(&self, other: &#name) -> bool {
                    self.raw() == #krate::Participant::to_repr(*other)
                }
            }
        });
    }

    Ok(expanded)
}

fn enum_shape(input: &DeriveInput, data: &syn::DataEnum) -> Result<Shape> {
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Participant enums need at least one variant",
        ));
    }
    if let Some(variant) = data
        .variants
        .iter()
        .find(|variant| !matches!(variant.fields, Fields::Unit))
    {
        return Err(syn::Error::new_spanned(
            variant,
            "Participant can only be derived for fieldless enums",
        ));
    }

    let repr_ident = integer_repr(&input.attrs)?.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "Participant enums need an integer representation, e.g. #[repr(u32)]",
        )
    })?;
    let repr: Type = syn::parse_quote!(#repr_ident);

    let variants: Vec<&Ident> = data.variants.iter().map(|variant| &variant.ident).collect();
    let signature = format!(
        "{repr_ident}|{}",
        variants
            .iter()
            .map(|variant| variant.to_string())
            .collect::<Vec<_>>()
            .join(",")
    );

    Ok(Shape {
        to_repr: quote! { self as #repr },
        from_repr: quote! {
            #(
                if repr == Self::#variants as #repr {
                    return ::core::option::Option::Some(Self::#variants);
                }
            )*
            ::core::option::Option::None
        },
        repr,
        signature,
    })
}

fn struct_shape(input: &DeriveInput, fields: &Fields) -> Result<Shape> {
    let mut iter = fields.iter();
    let field = match (iter.next(), iter.next()) {
        (Some(field), None) => field,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Participant structs must have exactly one field, the underlying integer",
            ))
        }
    };

    let repr = field.ty.clone();
    let signature = quote!(#repr).to_string();
    let (to_repr, from_repr) = match &field.ident {
        Some(ident) => (
            quote! { self.#ident },
            quote! { ::core::option::Option::Some(Self { #ident: repr }) },
        ),
        None => (
            quote! { self.0 },
            quote! { ::core::option::Option::Some(Self(repr)) },
        ),
    };

    Ok(Shape {
        repr,
        to_repr,
        from_repr,
        signature,
    })
}

/// The integer named by `#[repr(..)]`, if any.
fn integer_repr(attrs: &[Attribute]) -> Result<Option<Ident>> {
    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        let idents = attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
        if let Some(ident) = idents
            .into_iter()
            .find(|ident| INTEGER_REPRS.contains(&ident.to_string().as_str()))
        {
            return Ok(Some(ident));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: DeriveInput) -> String {
        match expand(&input) {
            Ok(tokens) => tokens.to_string(),
            Err(err) => panic!("expansion failed: {err}"),
        }
    }

    fn expand_err(input: DeriveInput) -> String {
        match expand(&input) {
            Ok(_) => panic!("expansion should fail"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn enum_expansion_checks_every_variant() {
        let rendered = expand_str(syn::parse_quote! {
            #[repr(u16)]
            enum Mode { Idle = 0, Busy = 4 }
        });
        assert!(rendered.contains("type Repr = u16"));
        assert!(rendered.contains("Self :: Idle as u16"));
        assert!(rendered.contains("Self :: Busy as u16"));
        assert!(rendered.contains("\"Mode\""));
    }

    #[test]
    fn tuple_struct_expansion_is_total() {
        let rendered = expand_str(syn::parse_quote! {
            struct Perms(u8);
        });
        assert!(rendered.contains("type Repr = u8"));
        assert!(rendered.contains("Some (Self (repr))"));
        assert!(rendered.contains("SharedBitfield < L >"));
    }

    #[test]
    fn named_struct_uses_field() {
        let rendered = expand_str(syn::parse_quote! {
            struct Perms { bits: u64 }
        });
        assert!(rendered.contains("self . bits"));
        assert!(rendered.contains("Self { bits : repr }"));
    }

    #[test]
    fn explicit_tag_and_crate_path() {
        let rendered = expand_str(syn::parse_quote! {
            #[participant(tag = 1, crate = "shared")]
            struct Perms(u8);
        });
        assert!(rendered.contains("impl shared :: Participant for Perms"));
        assert_eq!(rendered.matches("tag :: X0").count(), 15);
        assert_eq!(rendered.matches("tag :: X1").count(), 1);
    }

    #[test]
    fn derived_tags_differ_by_name() {
        let first = expand_str(syn::parse_quote! { struct First(u8); });
        let second = expand_str(syn::parse_quote! { struct Second(u8); });
        let tag_of = |rendered: &str| {
            let start = rendered.find("type Tag").unwrap_or(0);
            let end = rendered.find("const NAME").unwrap_or(rendered.len());
            rendered[start..end].to_string()
        };
        assert_ne!(tag_of(&first), tag_of(&second));
    }

    #[test]
    fn rejections() {
        assert!(expand_err(syn::parse_quote! { enum Mode { A, B } }).contains("#[repr(u32)]"));
        assert!(expand_err(syn::parse_quote! { #[repr(u8)] enum Mode { A(u8) } })
            .contains("fieldless"));
        assert!(expand_err(syn::parse_quote! { #[repr(u8)] enum Empty {} })
            .contains("at least one variant"));
        assert!(expand_err(syn::parse_quote! { struct Pair(u8, u8); }).contains("exactly one"));
        assert!(expand_err(syn::parse_quote! { struct Unit; }).contains("exactly one"));
        assert!(expand_err(syn::parse_quote! { struct Wrap<T>(T); }).contains("generic"));
        assert!(expand_err(syn::parse_quote! {
            #[participant(colour = 1)]
            struct Perms(u8);
        })
        .contains("unknown participant attribute key: colour"));
    }
}
