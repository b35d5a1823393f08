//! Redaction traversal for set container types.

use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

use super::redact_seq;
use crate::{
    error::Result,
    redaction::{redactor::Redactor, traits::Redact},
    value::Value,
};

impl<T> Redact for BTreeSet<T>
where
    T: Redact,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        redact_seq(self, redactor)
    }
}

impl<T, S> Redact for HashSet<T, S>
where
    T: Redact,
    S: BuildHasher,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        // NOTE: Elements are sorted by their rendered form so hasher state never
        // leaks into the output order.
        let mut items = self
            .iter()
            .map(|item| item.redact_with(redactor))
            .collect::<Result<Vec<_>>>()?;
        items.sort_by_cached_key(ToString::to_string);
        Ok(Value::Seq(items))
    }
}
