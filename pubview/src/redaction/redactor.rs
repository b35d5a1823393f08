//! The redaction entrypoint.
//!
//! A [`Redactor`] carries the per-call traversal state. Plain owned data needs
//! none. A cycle needs either shared ownership (`Rc`, `Arc`) or interior
//! mutability (`Cell`, `RefCell`, `RwLock`) holding a reference back up the
//! graph, so those impls register what they are entering and the redactor
//! refuses to enter the same object twice.

use std::{any::type_name, collections::HashSet};

use serde::Serialize;
use tracing::{trace, warn};

use super::traits::{PublicView, Redact};
use crate::{
    error::{Error, Result},
    value::{self, Value},
};

/// Traversal state for one redaction.
#[derive(Debug, Default)]
pub struct Redactor {
    /// Objects currently being redacted, keyed by address and type. A struct
    /// and its first field share an address but never a type.
    in_progress: HashSet<(usize, &'static str)>,
}

impl Redactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redacts `value` into a fresh tree.
    pub fn redact<T: Redact + ?Sized>(&mut self, value: &T) -> Result<Value> {
        value.redact_with(self)
    }

    /// Emits the public view of `value` verbatim.
    ///
    /// This is terminal: the view is captured through `Serialize` and never
    /// walked by `Redact`.
    pub fn view<T: PublicView + ?Sized>(value: &T) -> Result<Value> {
        trace!(type_name = type_name::<T>(), "capturing public view");
        value::capture(&value.public_view())
    }

    /// Captures an opaque leaf through its `Serialize` impl.
    pub fn verbatim<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
        value::capture(value)
    }

    /// Redacts `value`, which lives at `address`, failing if the same object
    /// is already being redacted further up the stack.
    ///
    /// Objects reached twice through siblings (a diamond) are fine; only
    /// re-entry from below is a cycle.
    pub(crate) fn shared<T: Redact + ?Sized>(&mut self, address: usize, value: &T) -> Result<Value> {
        let type_name = type_name::<T>();
        let key = (address, type_name);
        if !self.in_progress.insert(key) {
            warn!(type_name, "cycle detected during redaction");
            return Err(Error::Cycle { type_name });
        }
        let result = value.redact_with(self);
        self.in_progress.remove(&key);
        result
    }
}

/// Redacts `value` with a fresh [`Redactor`].
pub fn redact<T: Redact + ?Sized>(value: &T) -> Result<Value> {
    Redactor::new().redact(value)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{Redactor, redact};
    use crate::{PublicView, Value};

    #[derive(Serialize)]
    struct Masked {
        shown: &'static str,
    }

    struct Secretive;

    impl PublicView for Secretive {
        type View = Masked;

        fn public_view(&self) -> Masked {
            Masked { shown: "public" }
        }
    }

    #[test]
    fn view_is_captured_verbatim() {
        let value = Redactor::view(&Secretive).unwrap();
        assert_eq!(value.get("shown"), Some(&Value::from("public")));
        assert_eq!(value.as_record().map(crate::Record::name), Some("Masked"));
    }

    #[test]
    fn redact_free_function_uses_fresh_state() {
        assert_eq!(redact(&5u8).unwrap(), Value::UInt(5));
        assert_eq!(redact("x").unwrap(), Value::from("x"));
    }

    #[test]
    fn shared_releases_address_after_use() {
        let mut redactor = Redactor::new();
        assert!(redactor.shared(1, &1u8).is_ok());
        assert!(redactor.shared(1, &1u8).is_ok());
        assert!(redactor.in_progress.is_empty());
    }

    #[test]
    fn same_address_with_another_type_is_not_reentry() {
        let mut redactor = Redactor::new();
        redactor.in_progress.insert((1, std::any::type_name::<u16>()));
        assert!(redactor.shared(1, &1u8).is_ok());
        assert!(matches!(
            redactor.shared(1, &1u16),
            Err(crate::Error::Cycle { .. })
        ));
    }
}
