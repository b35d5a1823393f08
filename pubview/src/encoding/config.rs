//! Runtime encoder selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EncodeOptions, Encoder, Format, JsonEncoder};

/// Encoder settings a host application can load from its own config file.
///
/// ```ignore
/// let config: EncoderConfig = toml::from_str(r#"
///     format = "xml"
///     pretty_print = true
///     xml_root = "response"
/// "#)?;
/// let encoder = config.build();
/// let body = encoder.encode(&value, &config.options())?;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub format: Format,
    pub pretty_print: bool,
    pub emit_null_for_empty: bool,
    /// Root element for XML documents. Ignored by the JSON encoder.
    pub xml_root: Option<String>,
    /// Element name for sequence entries under `xml_root`. Ignored by the
    /// JSON encoder.
    pub xml_item_name: Option<String>,
}

impl EncoderConfig {
    pub fn options(&self) -> EncodeOptions {
        EncodeOptions {
            pretty_print: self.pretty_print,
            emit_null_for_empty: self.emit_null_for_empty,
        }
    }

    pub fn build(&self) -> Box<dyn Encoder> {
        debug!(format = %self.format, root = ?self.xml_root, "building encoder");
        match self.format {
            Format::Json => Box::new(JsonEncoder::new()),
            #[cfg(feature = "xml")]
            Format::Xml => {
                let mut encoder = super::XmlEncoder::new();
                if let Some(root) = &self.xml_root {
                    encoder = encoder.with_root(root.clone());
                }
                if let Some(item_name) = &self.xml_item_name {
                    encoder = encoder.with_item_name(item_name.clone());
                }
                Box::new(encoder)
            }
        }
    }
}
