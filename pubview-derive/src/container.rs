//! Parsing of container-level and variant-level `#[pubview(...)]` attributes.

use syn::{Attribute, LitStr, Meta, Result, spanned::Spanned};

/// Options placed on the struct or enum itself.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// `#[pubview(view)]`: delegate to the type's `PublicView` impl.
    pub(crate) view: bool,
    /// `#[pubview(rename = "...")]`: record / enum name in the output.
    pub(crate) rename: Option<LitStr>,
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("pubview") {
            continue;
        }
        if !matches!(attr.meta, Meta::List(_)) {
            return Err(syn::Error::new(
                attr.span(),
                "expected #[pubview(...)] syntax (e.g., #[pubview(view)])",
            ));
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("view") {
                if options.view {
                    return Err(meta.error("duplicate `view` attribute"));
                }
                options.view = true;
                return Ok(());
            }
            if meta.path.is_ident("rename") {
                if options.rename.is_some() {
                    return Err(meta.error("duplicate `rename` attribute"));
                }
                options.rename = Some(meta.value()?.parse()?);
                return Ok(());
            }
            Err(meta.error("unknown pubview container attribute; expected `view` or `rename`"))
        })?;
    }

    if options.view {
        if let Some(rename) = &options.rename {
            return Err(syn::Error::new(
                rename.span(),
                "`rename` has no effect on `#[pubview(view)]` types; \
                 the view's own name is emitted",
            ));
        }
    }

    Ok(options)
}

/// Parses `#[pubview(rename = "...")]` on an enum variant.
pub(crate) fn parse_variant_rename(attrs: &[Attribute]) -> Result<Option<LitStr>> {
    let mut rename = None;

    for attr in attrs {
        if !attr.path().is_ident("pubview") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if rename.is_some() {
                    return Err(meta.error("duplicate `rename` attribute"));
                }
                rename = Some(meta.value()?.parse::<LitStr>()?);
                return Ok(());
            }
            Err(meta.error("enum variants only accept #[pubview(rename = \"...\")]"))
        })?;
    }

    Ok(rename)
}
