//! Generic type parameter handling and trait bound management.
//!
//! Only generics that appear in emitted fields get a `Redact` bound. Skipped
//! fields and `PhantomData<T>` markers never reach the output, so
//!
//! ```ignore
//! #[derive(Redact)]
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,
//! }
//! ```
//!
//! stays redactable for any `T`.

use syn::{Generics, Ident, parse_quote};

use crate::crate_path;

/// Collects the declared type parameters that a set of field types mention.
pub(crate) struct UsedGenerics<'a> {
    declared: &'a Generics,
    found: Vec<Ident>,
}

impl<'a> UsedGenerics<'a> {
    pub(crate) fn new(declared: &'a Generics) -> Self {
        Self {
            declared,
            found: Vec::new(),
        }
    }

    pub(crate) fn into_idents(self) -> Vec<Ident> {
        self.found
    }

    fn note(&mut self, ident: &Ident) {
        let declared = self.declared.type_params().any(|param| param.ident == *ident);
        if declared && !self.found.contains(ident) {
            self.found.push(ident.clone());
        }
    }

    pub(crate) fn visit_type(&mut self, ty: &syn::Type) {
        match ty {
            syn::Type::Path(type_path) => {
                if let Some(qself) = &type_path.qself {
                    self.visit_type(&qself.ty);
                }
                self.visit_path(&type_path.path);
            }
            syn::Type::Reference(reference) => self.visit_type(&reference.elem),
            syn::Type::Ptr(pointer) => self.visit_type(&pointer.elem),
            syn::Type::Slice(slice) => self.visit_type(&slice.elem),
            syn::Type::Array(array) => self.visit_type(&array.elem),
            syn::Type::Paren(paren) => self.visit_type(&paren.elem),
            syn::Type::Group(group) => self.visit_type(&group.elem),
            syn::Type::Tuple(tuple) => tuple.elems.iter().for_each(|elem| self.visit_type(elem)),
            syn::Type::TraitObject(object) => {
                object.bounds.iter().for_each(|bound| self.visit_bound(bound));
            }
            syn::Type::ImplTrait(impl_trait) => {
                impl_trait
                    .bounds
                    .iter()
                    .for_each(|bound| self.visit_bound(bound));
            }
            _ => {}
        }
    }

    fn visit_bound(&mut self, bound: &syn::TypeParamBound) {
        if let syn::TypeParamBound::Trait(trait_bound) = bound {
            self.visit_path(&trait_bound.path);
        }
    }

    fn visit_path(&mut self, path: &syn::Path) {
        for segment in &path.segments {
            self.note(&segment.ident);
            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    match arg {
                        syn::GenericArgument::Type(inner) => self.visit_type(inner),
                        syn::GenericArgument::AssocType(assoc) => self.visit_type(&assoc.ty),
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Adds `Redact` bounds to the generic parameters used by emitted fields.
pub(crate) fn add_redact_bounds(mut generics: Generics, used: &[Ident]) -> Generics {
    let redact_path = crate_path("Redact");
    for param in generics.type_params_mut() {
        if used.contains(&param.ident) {
            param.bounds.push(parse_quote!(#redact_path));
        }
    }
    generics
}
