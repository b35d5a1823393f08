//! Redacting response encoding for API handlers.
//!
//! This crate lets a handler hand an internal domain object straight to an
//! encoder without leaking secrets. It separates:
//! - **Redaction**: turning any value into a [`Value`] tree with suppressed
//!   fields physically removed, or replaced wholesale by a type's
//!   [`PublicView`].
//! - **Encoding**: handing that tree to `serde_json` or `quick-xml`.
//!
//! What this crate does:
//! - defines the [`Redact`] traversal trait and its std container impls
//! - defines the [`Value`] tree and the [`Redactor`] entrypoint
//! - provides JSON and XML [`Encoder`]s plus logging adapters behind feature
//!   flags (e.g. `slog`)
//!
//! What it does not do:
//! - route requests or write HTTP responses
//! - validate input or generate schemas
//!
//! The `Redact` derive macro lives in `pubview-derive` and is re-exported from
//! this crate.
//!
//! ```ignore
//! use pubview::{EncodeOptions, Encoder, JsonEncoder, Redact};
//!
//! #[derive(Redact)]
//! struct Account {
//!     id: u64,
//!     email: String,
//!     #[pubview(skip)]
//!     password_hash: String,
//! }
//!
//! let body = JsonEncoder::new().encode(&account, &EncodeOptions::default())?;
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use pubview_derive::Redact;

#[allow(unused_extern_crates)]
extern crate self as pubview;

// Module declarations
mod encoding;
mod error;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;
pub mod tracing;
mod value;

// Re-exports from encoding module
pub use encoding::{EncodeOptions, Encoder, EncoderConfig, Format, JsonEncoder, UnknownFormat, must};
#[cfg(feature = "xml")]
pub use encoding::{DEFAULT_ITEM_NAME, XML_HEADER, XmlEncoder};
// Re-exports from error module
pub use error::{Error, Result};
// Re-exports from redaction module
pub use redaction::{PublicView, Redact, Redactor, redact};
// Re-exports from value module
pub use value::{Field, Payload, Record, Value, Variant};
