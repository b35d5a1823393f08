//! Wire encoders for redacted values.
//!
//! Every encoder redacts first and then hands the [`Value`](crate::Value) tree
//! to a marshaling library. Encoders are plain configuration and can be shared
//! across threads; a response layer typically holds a `Box<dyn Encoder>` built
//! from an [`EncoderConfig`].
//!
//! - **`json`**: [`JsonEncoder`] over `serde_json`
//! - **`xml`** (feature `xml`): [`XmlEncoder`] over `quick-xml`
//! - **`config`**: [`EncoderConfig`] for selecting and building an encoder

mod config;
mod json;
#[cfg(feature = "xml")]
mod xml;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use config::EncoderConfig;
pub use json::JsonEncoder;
#[cfg(feature = "xml")]
pub use xml::{DEFAULT_ITEM_NAME, XML_HEADER, XmlEncoder};

use crate::{error::Result, redaction::Redact};

/// Per-call encoding switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Indent the output.
    pub pretty_print: bool,
    /// Emit `null` for a value that redacts to nothing. When unset, the JSON
    /// encoder writes `{}` instead.
    pub emit_null_for_empty: bool,
}

impl EncodeOptions {
    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            ..Self::default()
        }
    }
}

/// Turns a redactable value into response bytes.
///
/// The trait is object safe so handlers can be written against
/// `&dyn Encoder` without knowing the negotiated format.
pub trait Encoder: Send + Sync {
    /// Redacts `value` and encodes the result.
    ///
    /// Either the complete output is returned or an error; nothing is written
    /// partially.
    fn encode(&self, value: &dyn Redact, options: &EncodeOptions) -> Result<Vec<u8>>;

    /// The wire format this encoder produces.
    fn format(&self) -> Format;

    /// The `Content-Type` header value for the output.
    fn content_type(&self) -> &'static str {
        self.format().content_type()
    }
}

/// Supported wire formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    #[cfg(feature = "xml")]
    Xml,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            #[cfg(feature = "xml")]
            Self::Xml => "xml",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json; charset=utf-8",
            #[cfg(feature = "xml")]
            Self::Xml => "application/xml; charset=utf-8",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a format name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown encoding format `{0}`")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        if name.eq_ignore_ascii_case("json") {
            return Ok(Self::Json);
        }
        #[cfg(feature = "xml")]
        if name.eq_ignore_ascii_case("xml") {
            return Ok(Self::Xml);
        }
        Err(UnknownFormat(name.to_owned()))
    }
}

/// Unwraps an encoding result, panicking on failure.
///
/// For frameworks that centralize error handling through panic recovery.
/// Everywhere else, propagate the error instead.
///
/// # Panics
///
/// Panics with the error's message when `result` is an `Err`.
pub fn must<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// Logs the outcome of an encode call.
fn log_outcome(format: Format, result: Result<Vec<u8>>) -> Result<Vec<u8>> {
    match &result {
        Ok(bytes) => debug!(%format, bytes = bytes.len(), "encoded response"),
        Err(err) => warn!(%format, error = %err, "encoding failed"),
    }
    result
}
