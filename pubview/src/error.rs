//! Error type shared by redaction and encoding.
//!
//! Redaction of plain (acyclic, readable) data cannot fail. The guard variants
//! exist for shared ownership and cell-linked graphs; everything the
//! marshaling libraries reject is folded into [`Error::Marshal`].

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while redacting or encoding a value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The marshaling library rejected the value tree.
    #[error("{format} marshaling failed: {message}")]
    Marshal {
        /// Which marshaler failed (`json`, `xml`, or `value` for view capture).
        format: &'static str,
        message: String,
    },

    /// A shared pointer or cell was reached again while it was still being
    /// redacted.
    #[error("cycle detected while redacting `{type_name}`")]
    Cycle { type_name: &'static str },

    /// A cell or lock was exclusively held, so its contents could not be read.
    #[error("`{type_name}` is mutably borrowed and cannot be redacted")]
    Borrowed { type_name: &'static str },
}

impl Error {
    pub(crate) fn marshal(format: &'static str, message: impl fmt::Display) -> Self {
        Self::Marshal {
            format,
            message: message.to_string(),
        }
    }

    /// Returns `true` for failures reported by a marshaling library.
    pub fn is_marshal(&self) -> bool {
        matches!(self, Self::Marshal { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::marshal("value", msg)
    }
}
