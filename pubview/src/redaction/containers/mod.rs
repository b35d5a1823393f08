//! `Redact` implementations for standard library types.
//!
//! Scalars convert directly into the matching [`Value`](crate::Value) variant.
//! Containers redact their contents element-wise through the same
//! [`Redactor`](crate::Redactor), so nested suppression and public views apply
//! at every depth.
//!
//! ## Map Keys Are Rendered, Not Redacted
//!
//! For `HashMap` and `BTreeMap`, only **values** are redacted. Keys are
//! rendered with `Display` and emitted as-is. Do not place sensitive data in
//! map keys unless you intend it to remain visible.
//!
//! ## Unordered Collections Are Sorted
//!
//! `HashMap` entries are emitted sorted by key and `HashSet` elements sorted
//! by their compact JSON rendering, so the output never depends on hasher
//! state.

mod cells;
mod maps;
mod passthrough;
mod sequences;
mod sets;
mod wrappers;


use crate::{Redact, Redactor, Result, Value};

// =============================================================================
// Implementation helpers
// =============================================================================

macro_rules! impl_redact_scalar {
    ($variant:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl crate::redaction::traits::Redact for $ty {
                fn redact_with(
                    &self,
                    _redactor: &mut crate::redaction::redactor::Redactor,
                ) -> crate::error::Result<crate::value::Value> {
                    Ok(crate::value::Value::$variant((*self).into()))
                }
            }
        )+
    };
}

/// Opaque leaves are captured through `Serialize` rather than walked.
macro_rules! impl_redact_verbatim {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::redaction::traits::Redact for $ty {
                fn redact_with(
                    &self,
                    _redactor: &mut crate::redaction::redactor::Redactor,
                ) -> crate::error::Result<crate::value::Value> {
                    crate::redaction::redactor::Redactor::verbatim(self)
                }
            }
        )+
    };
}

pub(super) use impl_redact_scalar;
pub(super) use impl_redact_verbatim;

/// Redacts every item in order into a `Value::Seq`.
fn redact_seq<'a, T, I>(items: I, redactor: &mut Redactor) -> Result<Value>
where
    T: Redact + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| item.redact_with(redactor))
        .collect::<Result<Vec<_>>>()
        .map(Value::Seq)
}
