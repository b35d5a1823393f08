//! XML encoding through `quick-xml`'s serde serializer.
//!
//! Records become elements named after the record and fields become child
//! elements. XML needs exactly one named root element, so a top-level
//! sequence, map, scalar, or string is rejected unless a root name is
//! configured with [`XmlEncoder::with_root`]. Under a root, a sequence becomes
//! one root element holding an item element per entry.

use quick_xml::se::Serializer;
use serde::{Serialize, ser::SerializeMap};

use super::{EncodeOptions, Encoder, Format, log_outcome};
use crate::{
    error::{Error, Result},
    redaction::{Redact, redact},
    value::Value,
};

/// Declaration written before every document.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const INDENT_SIZE: usize = 2;

/// Element name for sequence entries under a configured root.
pub const DEFAULT_ITEM_NAME: &str = "item";

/// Encodes redacted values as XML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlEncoder {
    root: Option<String>,
    item_name: String,
}

impl Default for XmlEncoder {
    fn default() -> Self {
        Self {
            root: None,
            item_name: DEFAULT_ITEM_NAME.to_owned(),
        }
    }
}

impl XmlEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps every document in an element named `root`.
    ///
    /// Required for anything but a record or enum at the top level; for
    /// records it replaces the record's own name.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Names the element each sequence entry is written as under the root.
    #[must_use]
    pub fn with_item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = item_name.into();
        self
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    fn write(&self, value: &Value, pretty: bool) -> Result<Vec<u8>> {
        let mut document = String::from(XML_HEADER);
        if value.is_null() {
            return Ok(document.into_bytes());
        }
        if self.root.is_none() && !matches!(value, Value::Record(_) | Value::Variant(_)) {
            return Err(Error::marshal(
                "xml",
                "top-level sequences, maps, and scalars need a root element; \
                 use XmlEncoder::with_root",
            ));
        }

        let mut body = String::new();
        let mut serializer = match self.root.as_deref() {
            Some(root) => Serializer::with_root(&mut body, Some(root))
                .map_err(|err| Error::marshal("xml", err))?,
            None => Serializer::new(&mut body),
        };
        if pretty {
            serializer.indent(' ', INDENT_SIZE);
        }
        let written = match value {
            Value::Seq(items) => Items {
                item_name: &self.item_name,
                items,
            }
            .serialize(serializer),
            _ => value.serialize(serializer),
        };
        written.map_err(|err| Error::marshal("xml", err))?;

        document.push_str(&body);
        Ok(document.into_bytes())
    }
}

/// A sequence written as repeated `item_name` children of a single element.
struct Items<'a> {
    item_name: &'a str,
    items: &'a [Value],
}

impl Serialize for Items<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.item_name, self.items)?;
        map.end()
    }
}

impl Encoder for XmlEncoder {
    fn encode(&self, value: &dyn Redact, options: &EncodeOptions) -> Result<Vec<u8>> {
        let result = redact(value).and_then(|tree| self.write(&tree, options.pretty_print));
        log_outcome(Format::Xml, result)
    }

    fn format(&self) -> Format {
        Format::Xml
    }
}
