//! Struct-specific `Redact` derivation.
//!
//! This module generates the structural copy for struct fields and collects
//! generic parameters that require trait bounds.

use quote::quote;
use syn::{DataStruct, Fields, LitStr, Result};

use crate::{
    DeriveOutput, crate_path,
    generics::UsedGenerics,
    transform::{generate_items, generate_record},
};

pub(crate) fn derive_struct(
    name: &LitStr,
    data: &DataStruct,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let value_path = crate_path("Value");
    let mut used = UsedGenerics::new(generics);

    let body = match &data.fields {
        Fields::Named(fields) => {
            let output = generate_record(&mut used, name, fields, |ident| quote! { &self.#ident })?;
            let record = output.record;
            quote! { Ok(#value_path::Record(#record)) }
        }
        Fields::Unnamed(fields) => {
            let output = generate_items(&mut used, fields, |index| {
                let index = syn::Index::from(index);
                quote! { &self.#index }
            })?;
            let items = output.items;
            if fields.unnamed.len() == 1 && items.len() == 1 {
                // Newtype: transparent, like serde.
                let item = &items[0];
                quote! { #item }
            } else {
                quote! { Ok(#value_path::Seq(::std::vec![#(#items?),*])) }
            }
        }
        Fields::Unit => {
            let record_path = crate_path("Record");
            quote! { Ok(#value_path::Record(#record_path::new(#name))) }
        }
    };

    Ok(DeriveOutput {
        body,
        used_generics: used.into_idents(),
    })
}
