//! Shared field emission logic for struct and enum derivation.
//!
//! Named fields become pushes onto a `Record`; unnamed fields become sequence
//! items. Both paths apply the same suppression rules, so a field that is
//! skipped in a struct is skipped the same way inside an enum variant.

use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{FieldsNamed, FieldsUnnamed, Ident, LitStr, Result, ext::IdentExt, spanned::Spanned};

use crate::{
    crate_path,
    generics::UsedGenerics,
    strategy::{FieldOptions, parse_field_options},
    types::is_phantom_data,
};

/// Output name for an identifier: the identifier without any `r#` prefix.
pub(crate) fn name_literal(ident: &Ident) -> LitStr {
    LitStr::new(&ident.unraw().to_string(), ident.span())
}

/// Generates the `Redact::redact_with` call for one field, or `None` when the
/// field never reaches the output.
///
/// The returned expression evaluates to `Result<Value>`; callers decide where
/// to apply `?`.
fn field_value(
    used: &mut UsedGenerics<'_>,
    ty: &syn::Type,
    access: &TokenStream,
    span: Span,
    options: &FieldOptions,
) -> Option<TokenStream> {
    if options.is_skipped() || is_phantom_data(ty) {
        return None;
    }
    used.visit_type(ty);
    let redact_path = crate_path("Redact");
    Some(quote_spanned! { span =>
        #redact_path::redact_with(#access, __redactor)
    })
}

/// A record built from named fields, plus the identifiers it reads.
pub(crate) struct RecordOutput {
    /// Block expression evaluating to a `Record`.
    pub(crate) record: TokenStream,
    /// Fields that are emitted, in declaration order.
    pub(crate) emitted: Vec<Ident>,
}

/// Generates a `Record` named `name` from named fields.
///
/// `access` maps a field identifier to an expression of type `&FieldType`.
pub(crate) fn generate_record(
    used: &mut UsedGenerics<'_>,
    name: &LitStr,
    fields: &FieldsNamed,
    access: impl Fn(&Ident) -> TokenStream,
) -> Result<RecordOutput> {
    let record_path = crate_path("Record");
    let mut pushes = Vec::new();
    let mut emitted = Vec::new();
    let mut keys: Vec<String> = Vec::new();

    for field in &fields.named {
        let options = parse_field_options(&field.attrs)?;
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(field.span(), "named field without identifier"))?;
        let Some(value) = field_value(used, &field.ty, &access(ident), field.span(), &options)
        else {
            continue;
        };

        let key = options.rename.clone().unwrap_or_else(|| name_literal(ident));
        if keys.contains(&key.value()) {
            return Err(syn::Error::new(
                key.span(),
                format!("duplicate output name `{}`", key.value()),
            ));
        }
        keys.push(key.value());
        pushes.push(if options.omit_empty {
            quote! { __record.push_unless_empty(#key, #value?); }
        } else {
            quote! { __record.push(#key, #value?); }
        });
        emitted.push(ident.clone());
    }

    let capacity = pushes.len();
    Ok(RecordOutput {
        record: quote! {
            {
                #[allow(unused_mut)]
                let mut __record = #record_path::with_capacity(#name, #capacity);
                #(#pushes)*
                __record
            }
        },
        emitted,
    })
}

/// Sequence items built from unnamed fields.
pub(crate) struct ItemsOutput {
    /// One `Result<Value>` expression per emitted field.
    pub(crate) items: Vec<TokenStream>,
    /// Per-field flag: `true` when the field at that position is emitted.
    pub(crate) emitted: Vec<bool>,
}

/// Generates item expressions for unnamed fields.
///
/// `access` maps a field position to an expression of type `&FieldType`.
pub(crate) fn generate_items(
    used: &mut UsedGenerics<'_>,
    fields: &FieldsUnnamed,
    access: impl Fn(usize) -> TokenStream,
) -> Result<ItemsOutput> {
    let mut items = Vec::new();
    let mut emitted = Vec::new();

    for (index, field) in fields.unnamed.iter().enumerate() {
        let options = parse_field_options(&field.attrs)?;
        if let Some(rename) = &options.rename {
            return Err(syn::Error::new(
                rename.span(),
                "`rename` only applies to named fields",
            ));
        }
        if options.omit_empty {
            return Err(syn::Error::new(
                field.span(),
                "`omit_empty` only applies to named fields",
            ));
        }

        match field_value(used, &field.ty, &access(index), field.span(), &options) {
            Some(value) => {
                items.push(value);
                emitted.push(true);
            }
            None => emitted.push(false),
        }
    }

    Ok(ItemsOutput { items, emitted })
}
