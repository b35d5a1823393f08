//! Parsing of `#[pubview(...)]` field attributes.
//!
//! This module maps attribute syntax to emission decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{Attribute, Lit, LitStr, Meta, Result, meta::ParseNestedMeta, spanned::Spanned};

/// Whether a field reaches the output at all.
///
/// ## Strategy Mapping
///
/// | Attribute                    | Strategy | Behavior                          |
/// |------------------------------|----------|-----------------------------------|
/// | None                         | `Emit`   | Redact the field and emit it      |
/// | `#[pubview(skip)]`           | `Skip`   | Field never appears in the output |
/// | `#[pubview(out = false)]`    | `Skip`   | Same as `skip`                    |
/// | `#[pubview(out = true)]`     | `Emit`   | Explicitly visible                |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    Emit,
    Skip,
}

/// Everything `#[pubview(...)]` can say about one field.
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) strategy: Strategy,
    /// Output name overriding the field identifier.
    pub(crate) rename: Option<LitStr>,
    /// Drop the field when its redacted value is empty.
    pub(crate) omit_empty: bool,
}

impl FieldOptions {
    pub(crate) fn is_skipped(&self) -> bool {
        self.strategy == Strategy::Skip
    }
}

fn parse_out_value(meta: &ParseNestedMeta<'_>) -> Result<bool> {
    let lit: Lit = meta.value()?.parse()?;
    match &lit {
        Lit::Bool(value) => Ok(value.value),
        Lit::Str(value) if value.value() == "false" => Ok(false),
        Lit::Str(value) if value.value() == "true" => Ok(true),
        _ => Err(syn::Error::new(
            lit.span(),
            "expected `out = false` or `out = true`",
        )),
    }
}

fn set_once<T>(target: &mut Option<(T, Span)>, value: T, span: Span, name: &str) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            format!("duplicate `{name}` in #[pubview] attributes on the same field"),
        ));
    }
    *target = Some((value, span));
    Ok(())
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut visible: Option<(bool, Span)> = None;
    let mut rename: Option<(LitStr, Span)> = None;
    let mut omit_empty: Option<((), Span)> = None;

    for attr in attrs {
        if !attr.path().is_ident("pubview") {
            continue;
        }
        if !matches!(attr.meta, Meta::List(_)) {
            return Err(syn::Error::new(
                attr.span(),
                "expected #[pubview(...)] syntax (e.g., #[pubview(skip)])",
            ));
        }

        attr.parse_nested_meta(|meta| {
            let span = meta.path.span();
            if meta.path.is_ident("skip") {
                return set_once(&mut visible, false, span, "skip` or `out");
            }
            if meta.path.is_ident("out") {
                let value = parse_out_value(&meta)?;
                return set_once(&mut visible, value, span, "skip` or `out");
            }
            if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                return set_once(&mut rename, name, span, "rename");
            }
            if meta.path.is_ident("omit_empty") {
                return set_once(&mut omit_empty, (), span, "omit_empty");
            }
            Err(meta.error(
                "unknown pubview field attribute; expected `skip`, `out`, `rename`, or `omit_empty`",
            ))
        })?;
    }

    let strategy = match visible {
        Some((false, _)) => Strategy::Skip,
        _ => Strategy::Emit,
    };

    if strategy == Strategy::Skip {
        if let Some((_, span)) = rename.as_ref() {
            return Err(syn::Error::new(
                *span,
                "`rename` has no effect on a suppressed field",
            ));
        }
        if let Some((_, span)) = omit_empty.as_ref() {
            return Err(syn::Error::new(
                *span,
                "`omit_empty` has no effect on a suppressed field",
            ));
        }
    }

    Ok(FieldOptions {
        strategy,
        rename: rename.map(|(name, _)| name),
        omit_empty: omit_empty.is_some(),
    })
}

/// Rejects any `#[pubview]` attribute, for positions where none applies.
pub(crate) fn reject_field_attributes(attrs: &[Attribute], reason: &str) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("pubview")) {
        Some(attr) => Err(syn::Error::new(attr.span(), reason)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_emits() {
        let options = parse_field_options(&parse_attrs(quote! {})).unwrap();
        assert_eq!(options.strategy, Strategy::Emit);
        assert!(options.rename.is_none());
        assert!(!options.omit_empty);
    }

    #[test]
    fn skip_suppresses() {
        let options = parse_field_options(&parse_attrs(quote! { #[pubview(skip)] })).unwrap();
        assert!(options.is_skipped());
    }

    #[test]
    fn out_false_suppresses_in_both_spellings() {
        let bool_form = parse_field_options(&parse_attrs(quote! { #[pubview(out = false)] }));
        let str_form = parse_field_options(&parse_attrs(quote! { #[pubview(out = "false")] }));
        assert!(bool_form.unwrap().is_skipped());
        assert!(str_form.unwrap().is_skipped());
    }

    #[test]
    fn out_true_emits() {
        let options =
            parse_field_options(&parse_attrs(quote! { #[pubview(out = true)] })).unwrap();
        assert_eq!(options.strategy, Strategy::Emit);
    }

    #[test]
    fn invalid_out_value_errors() {
        let result = parse_field_options(&parse_attrs(quote! { #[pubview(out = "maybe")] }));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("expected `out = false`")
        );
    }

    #[test]
    fn rename_and_omit_empty_combine() {
        let options = parse_field_options(&parse_attrs(quote! {
            #[pubview(rename = "displayName", omit_empty)]
        }))
        .unwrap();
        assert_eq!(options.rename.unwrap().value(), "displayName");
        assert!(options.omit_empty);
    }

    #[test]
    fn skip_and_out_conflict() {
        let result = parse_field_options(&parse_attrs(quote! {
            #[pubview(skip)]
            #[pubview(out = true)]
        }));
        assert!(result.unwrap_err().to_string().contains("duplicate"));
    }

    #[test]
    fn rename_on_skipped_field_errors() {
        let result = parse_field_options(&parse_attrs(quote! {
            #[pubview(skip, rename = "x")]
        }));
        assert!(result.unwrap_err().to_string().contains("no effect"));
    }

    #[test]
    fn bare_path_errors() {
        let result = parse_field_options(&parse_attrs(quote! { #[pubview] }));
        assert!(result.unwrap_err().to_string().contains("#[pubview(...)]"));
    }

    #[test]
    fn unknown_key_errors() {
        let result = parse_field_options(&parse_attrs(quote! { #[pubview(hidden)] }));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("unknown pubview field attribute")
        );
    }

    #[test]
    fn other_attributes_ignored() {
        let options = parse_field_options(&parse_attrs(quote! {
            #[serde(skip)]
            #[doc = "docs"]
        }))
        .unwrap();
        assert_eq!(options.strategy, Strategy::Emit);
    }

    #[test]
    fn reject_reports_first_pubview_attribute() {
        let attrs = parse_attrs(quote! { #[pubview(skip)] });
        let result = reject_field_attributes(&attrs, "not here");
        assert_eq!(result.unwrap_err().to_string(), "not here");
    }
}
