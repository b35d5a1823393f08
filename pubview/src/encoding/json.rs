//! JSON encoding through `serde_json`.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{EncodeOptions, Encoder, Format, log_outcome};
use crate::{
    error::{Error, Result},
    redaction::{Redact, redact},
    value::Value,
};

/// Encodes redacted values as JSON.
///
/// A value that redacts to [`Value::Null`] is written as `{}` unless
/// [`EncodeOptions::emit_null_for_empty`] is set, so clients that always
/// expect an object keep working when a handler returns nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonEncoder {
    indent: String,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self {
            indent: "\t".to_owned(),
        }
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation unit used when pretty printing. Defaults to a tab.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    fn write(&self, value: &Value, pretty: bool) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(128);
        if pretty {
            let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
            let mut serializer = Serializer::with_formatter(&mut out, formatter);
            value
                .serialize(&mut serializer)
                .map_err(|err| Error::marshal("json", err))?;
        } else {
            serde_json::to_writer(&mut out, value).map_err(|err| Error::marshal("json", err))?;
        }
        Ok(out)
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, value: &dyn Redact, options: &EncodeOptions) -> Result<Vec<u8>> {
        let result = redact(value).and_then(|tree| {
            let tree = match tree {
                Value::Null if !options.emit_null_for_empty => Value::Map(Vec::new()),
                tree => tree,
            };
            self.write(&tree, options.pretty_print)
        });
        log_outcome(Format::Json, result)
    }

    fn format(&self) -> Format {
        Format::Json
    }
}
