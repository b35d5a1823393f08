//! Redaction traversal and entrypoints.
//!
//! This module provides the machinery for building redacted value trees:
//!
//! - **`traits`**: Core traits (`Redact`, `PublicView`)
//! - **`redactor`**: Traversal state and the `redact` entrypoint
//! - **`containers`**: `Redact` implementations for std types

mod containers;
mod redactor;
mod traits;

pub use redactor::{Redactor, redact};
pub use traits::{PublicView, Redact};
