//! Adapters for emitting redacted values through `tracing`.
//!
//! [`Value`] already implements `Display` as compact JSON, so an explicitly
//! redacted tree can be logged with `%`. [`TracingRedactExt`] does the
//! redaction inline:
//!
//! ```ignore
//! use pubview::tracing::TracingRedactExt;
//!
//! tracing::info!(user = %user.tracing_redacted(), "login");
//! ```

use ::tracing::field::{DisplayValue, display};

use crate::{redaction::Redact, value::Value};

/// Extension trait for logging redacted values as display strings.
pub trait TracingRedactExt: Redact {
    /// Redacts the value and wraps it for `tracing` as a display value.
    ///
    /// Logging is infallible: if redaction fails, the placeholder
    /// `"Failed to redact value: <error>"` is logged instead.
    fn tracing_redacted(&self) -> DisplayValue<Value> {
        let value = crate::redact(self)
            .unwrap_or_else(|err| Value::Str(format!("Failed to redact value: {err}")));
        display(value)
    }
}

impl<T: Redact + ?Sized> TracingRedactExt for T {}
