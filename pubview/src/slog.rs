//! Adapters for emitting redacted values through `slog`.
//!
//! This module connects [`Redact`] with `slog` by implementing `slog::Value`
//! for the redacted [`Value`] tree, serialized as structured JSON via `slog`'s
//! nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from `Redact`, never from
//!   the original value.
//! - Avoiding fallible logging APIs: redaction failures are represented as
//!   placeholder strings rather than propagated as errors.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{redaction::Redact, value::Value};

impl SlogValue for Value {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        match self {
            Self::Null => serializer.emit_none(key),
            Self::Bool(value) => serializer.emit_bool(key, *value),
            Self::Int(value) => serializer.emit_i64(key, *value),
            Self::UInt(value) => serializer.emit_u64(key, *value),
            Self::Float(value) => serializer.emit_f64(key, *value),
            Self::Str(value) => serializer.emit_str(key, value),
            _ => {
                let nested = slog::Serde(self.clone());
                SlogValue::serialize(&nested, record, key, serializer)
            }
        }
    }
}

/// Extension trait for ergonomic slog logging of redacted values.
///
/// ## Example
/// ```ignore
/// use pubview::slog::SlogRedactExt;
///
/// info!(logger, "login"; "user" => user.slog_redacted());
/// ```
pub trait SlogRedactExt: Redact {
    /// Redacts `self` and returns a `slog::Value` that serializes as
    /// structured JSON.
    ///
    /// If redaction fails, the returned value is the string
    /// `"Failed to redact value: <error>"`.
    fn slog_redacted(&self) -> Value {
        crate::redact(self)
            .unwrap_or_else(|err| Value::Str(format!("Failed to redact value: {err}")))
    }
}

impl<T: Redact + ?Sized> SlogRedactExt for T {}
