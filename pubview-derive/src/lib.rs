//! Derive macro for `pubview`.
//!
//! This crate generates the traversal code behind `#[derive(Redact)]`. It:
//! - reads `#[pubview(...)]` attributes on containers, variants, and fields
//! - emits a `pubview::Redact` implementation that builds a redacted `Value`
//!
//! It does **not** define the value tree or the encoders. Those live in the
//! main `pubview` crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, parse_quote, spanned::Spanned};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use container::{ContainerOptions, parse_container_options};
use derive_enum::{derive_enum, reject_variant_field_attributes};
use derive_struct::derive_struct;
use generics::add_redact_bounds;
use strategy::reject_field_attributes;
use transform::name_literal;

/// Derives `pubview::Redact` for structs and enums.
///
/// # Container Attributes
///
/// These attributes are placed on the struct/enum itself:
///
/// - `#[pubview(view)]` - Delegate to the type's `PublicView` impl. The view is
///   emitted verbatim and field attributes are rejected, since they would
///   never be consulted.
/// - `#[pubview(rename = "...")]` - Name used for the record (XML element) or
///   enum in the output.
///
/// # Field Attributes
///
/// - **No annotation**: The field is redacted through its own `Redact` impl
///   and emitted under its identifier.
///
/// - `#[pubview(skip)]` / `#[pubview(out = false)]`: The field never appears
///   in the output. Its type does not need to implement `Redact`.
///
/// - `#[pubview(rename = "...")]`: Emit the field under another name. Two
///   emitted fields with the same output name are a compile error.
///
/// - `#[pubview(omit_empty)]`: Drop the field when its redacted value is null,
///   `false`, zero, an empty string, or an empty sequence or map. Records and
///   enum values are always kept, even with no visible fields.
///
/// `PhantomData` fields are always omitted. Unions are rejected at compile
/// time.
///
/// # Variant Attributes
///
/// - `#[pubview(rename = "...")]`: Emit the variant under another name.
#[proc_macro_derive(Redact, attributes(pubview))]
pub fn derive_redact(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the pubview crate root.
///
/// Handles crate renaming (e.g., `my_view = { package = "pubview", ... }`).
/// Inside pubview itself the root resolves through `extern crate self as
/// pubview`, which also covers its integration tests and doctests.
fn crate_root() -> TokenStream {
    match crate_name("pubview") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::pubview },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = syn::parse_str::<syn::Path>(item).expect("pubview crate path should parse");
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    body: TokenStream,
    used_generics: Vec<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    if let Data::Union(u) = &data {
        return Err(syn::Error::new(
            u.union_token.span(),
            "`Redact` cannot be derived for unions",
        ));
    }

    let ContainerOptions { view, rename } = parse_container_options(&attrs)?;
    let crate_root = crate_root();

    if view {
        return expand_view(&ident, &generics, &data);
    }

    let name = rename.unwrap_or_else(|| name_literal(&ident));
    let derive_output = match &data {
        Data::Struct(data) => derive_struct(&name, data, &generics)?,
        Data::Enum(data) => derive_enum(&name, data, &generics)?,
        Data::Union(_) => unreachable!("unions rejected above"),
    };

    let bounded = add_redact_bounds(generics.clone(), &derive_output.used_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let body = derive_output.body;

    Ok(quote! {
        impl #impl_generics #crate_root::Redact for #ident #ty_generics #where_clause {
            fn redact_with(
                &self,
                __redactor: &mut #crate_root::Redactor,
            ) -> #crate_root::Result<#crate_root::Value> {
                #body
            }
        }
    })
}

/// Generates a `Redact` impl that hands off to `PublicView`.
fn expand_view(ident: &Ident, generics: &syn::Generics, data: &Data) -> Result<TokenStream> {
    const REASON: &str = "field attributes have no effect on `#[pubview(view)]` types; \
                          the public view is emitted verbatim";
    match data {
        Data::Struct(data) => {
            for field in &data.fields {
                reject_field_attributes(&field.attrs, REASON)?;
            }
        }
        Data::Enum(data) => reject_variant_field_attributes(data, REASON)?,
        Data::Union(_) => unreachable!("unions rejected above"),
    }

    let crate_root = crate_root();
    let mut view_generics = generics.clone();
    let (_, ty_generics, _) = generics.split_for_impl();
    view_generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#ident #ty_generics: #crate_root::PublicView));
    let (impl_generics, ty_generics, where_clause) = view_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_root::Redact for #ident #ty_generics #where_clause {
            fn redact_with(
                &self,
                _redactor: &mut #crate_root::Redactor,
            ) -> #crate_root::Result<#crate_root::Value> {
                #crate_root::Redactor::view(self)
            }
        }
    })
}
