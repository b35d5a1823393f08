//! Enum-specific `Redact` derivation.
//!
//! Each variant becomes a match arm producing a `Variant` value. Field
//! bindings are only introduced for fields that reach the output, so
//! suppressed fields are never touched.

use quote::{format_ident, quote};
use syn::{DataEnum, Fields, LitStr, Result, ext::IdentExt, spanned::Spanned};

use crate::{
    DeriveOutput,
    container::parse_variant_rename,
    crate_path,
    generics::UsedGenerics,
    transform::{generate_items, generate_record, name_literal},
};

pub(crate) fn derive_enum(
    name: &LitStr,
    data: &DataEnum,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let value_path = crate_path("Value");
    let variant_path = crate_path("Variant");
    let mut used = UsedGenerics::new(generics);
    let mut arms = Vec::new();
    let mut variant_names: Vec<String> = Vec::new();

    for (position, variant) in data.variants.iter().enumerate() {
        let ident = &variant.ident;
        let index = u32::try_from(position)
            .map_err(|_| syn::Error::new(variant.span(), "too many enum variants"))?;
        let variant_name =
            parse_variant_rename(&variant.attrs)?.unwrap_or_else(|| name_literal(ident));
        if variant_names.contains(&variant_name.value()) {
            return Err(syn::Error::new(
                variant_name.span(),
                format!("duplicate variant name `{}`", variant_name.value()),
            ));
        }
        variant_names.push(variant_name.value());

        let arm = match &variant.fields {
            Fields::Unit => quote! {
                Self::#ident => Ok(#value_path::from(
                    #variant_path::unit(#name, #index, #variant_name)
                )),
            },
            Fields::Named(fields) => {
                let output = generate_record(&mut used, &variant_name, fields, |field| {
                    let binding = format_ident!("__field_{}", field.unraw());
                    quote! { #binding }
                })?;
                let bindings = output.emitted.iter().map(|field| {
                    let binding = format_ident!("__field_{}", field.unraw());
                    quote! { #field: #binding }
                });
                let record = output.record;
                quote! {
                    Self::#ident { #(#bindings,)* .. } => Ok(#value_path::from(
                        #variant_path::record(#name, #index, #record)
                    )),
                }
            }
            Fields::Unnamed(fields) => {
                let output = generate_items(&mut used, fields, |field| {
                    let binding = format_ident!("__field_{}", field);
                    quote! { #binding }
                })?;
                let bindings = output.emitted.iter().enumerate().map(|(field, emitted)| {
                    if *emitted {
                        let binding = format_ident!("__field_{}", field);
                        quote! { #binding }
                    } else {
                        quote! { _ }
                    }
                });
                let items = output.items;
                let payload = if fields.unnamed.len() == 1 && items.len() == 1 {
                    let item = &items[0];
                    quote! { #variant_path::newtype(#name, #index, #variant_name, #item?) }
                } else {
                    quote! {
                        #variant_path::tuple(
                            #name,
                            #index,
                            #variant_name,
                            ::std::vec![#(#items?),*],
                        )
                    }
                };
                quote! {
                    Self::#ident(#(#bindings),*) => Ok(#value_path::from(#payload)),
                }
            }
        };
        arms.push(arm);
    }

    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    Ok(DeriveOutput {
        body,
        used_generics: used.into_idents(),
    })
}

/// Rejects `#[pubview]` on the fields of every variant.
pub(crate) fn reject_variant_field_attributes(data: &DataEnum, reason: &str) -> Result<()> {
    for variant in &data.variants {
        for field in &variant.fields {
            crate::strategy::reject_field_attributes(&field.attrs, reason)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proc_macro2::TokenStream;
    use quote::quote;
    use syn::{Data, DeriveInput};

    use super::*;

    fn derive(tokens: TokenStream) -> Result<DeriveOutput> {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        let Data::Enum(data) = &input.data else {
            panic!("expected an enum");
        };
        let name = LitStr::new(&input.ident.to_string(), input.ident.span());
        derive_enum(&name, data, &input.generics)
    }

    fn derive_err(tokens: TokenStream) -> String {
        match derive(tokens) {
            Ok(_) => panic!("expected a derive error"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn duplicate_field_names_in_a_variant_are_rejected() {
        let err = derive_err(quote! {
            enum Event {
                Login {
                    user: String,
                    #[pubview(rename = "user")]
                    alias: String,
                },
            }
        });
        assert!(err.contains("duplicate output name `user`"));
    }

    #[test]
    fn duplicate_variant_names_are_rejected() {
        let err = derive_err(quote! {
            enum Status {
                Active,
                #[pubview(rename = "Active")]
                Enabled,
            }
        });
        assert!(err.contains("duplicate variant name `Active`"));
    }

    #[test]
    fn empty_enum_matches_on_deref() {
        let output = derive(quote! { enum Never {} }).unwrap();
        assert!(output.body.to_string().starts_with("match * self"));
    }

    #[test]
    fn variant_indices_follow_declaration_order() {
        let body = derive(quote! { enum Status { Active, Suspended } })
            .unwrap()
            .body
            .to_string();
        assert!(body.contains("0u32"));
        assert!(body.contains("1u32"));
        assert!(body.contains("\"Suspended\""));
    }

    #[test]
    fn skipped_tuple_fields_bind_wildcard() {
        let body = derive(quote! {
            enum Credential {
                Token(String, #[pubview(skip)] String),
            }
        })
        .unwrap()
        .body
        .to_string();
        assert!(body.contains("__field_0 , _"));
    }

    #[test]
    fn skipped_named_fields_are_not_bound() {
        let body = derive(quote! {
            enum Event {
                Login { user: String, #[pubview(skip)] password: String },
            }
        })
        .unwrap()
        .body
        .to_string();
        assert!(body.contains("user : __field_user"));
        assert!(!body.contains("password"));
    }

    #[test]
    fn variant_rename_is_used() {
        let body = derive(quote! {
            enum Status {
                #[pubview(rename = "gone")]
                Deleted,
            }
        })
        .unwrap()
        .body
        .to_string();
        assert!(body.contains("\"gone\""));
    }

    #[test]
    fn generic_payloads_are_bounded() {
        let output = derive(quote! {
            enum Either<L, R> { Left(L), Right(#[pubview(skip)] R) }
        })
        .unwrap();
        let used: Vec<_> = output.used_generics.iter().map(ToString::to_string).collect();
        assert_eq!(used, ["L"]);
    }
}
