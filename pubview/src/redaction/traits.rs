//! Core traits for producing serialization-safe values.
//!
//! This module defines the two traits a type can implement:
//!
//! - [`Redact`]: Builds a [`Value`] tree with suppressed fields removed
//! - [`PublicView`]: Supplies a replacement view that is emitted verbatim

use serde::Serialize;

use super::redactor::Redactor;
use crate::{error::Result, value::Value};

// =============================================================================
// Redact - Types that can be turned into a redacted value tree
// =============================================================================

/// A type that can be redacted into a [`Value`].
///
/// This trait is implemented by types that derive `Redact`, by standard
/// library scalars and containers, and by `dyn Redact` itself. It is object
/// safe: a `Box<dyn Redact>` dispatches to the concrete value's impl, which is
/// where the choice between a public view and structural copying is made.
///
/// Implementations must not mutate `self` and must return the same tree for
/// the same input.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Redact`",
    label = "this type cannot be redacted for output",
    note = "use `#[derive(Redact)]` on the type definition",
    note = "or `#[pubview(skip)]` on the field if it must never be emitted"
)]
pub trait Redact {
    /// Produces the redacted tree for `self`.
    ///
    /// Call nested values through the same `redactor` so shared-reference
    /// cycle detection sees the whole traversal.
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value>;
}

// =============================================================================
// PublicView - Per-type override of structural redaction
// =============================================================================

/// A type-supplied public representation.
///
/// When a type opts in (with `#[derive(Redact)] #[pubview(view)]`, or by calling
/// [`Redactor::view`] from a hand-written `Redact` impl), the view replaces
/// structural redaction entirely. The view is serialized as-is: field
/// suppression markers are not consulted, so the view is responsible for
/// clearing anything sensitive itself.
///
/// ```ignore
/// #[derive(Clone, Serialize, Redact)]
/// #[pubview(view)]
/// struct User {
///     id: String,
///     password: String,
/// }
///
/// impl PublicView for User {
///     type View = User;
///
///     fn public_view(&self) -> User {
///         User { password: String::new(), ..self.clone() }
///     }
/// }
/// ```
pub trait PublicView {
    /// The replacement emitted in place of `Self`.
    type View: Serialize;

    /// Builds the public view of `self`.
    fn public_view(&self) -> Self::View;
}
