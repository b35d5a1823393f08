//! Redaction traversal for map container types (values only, keys rendered).

use std::{
    collections::{BTreeMap, HashMap},
    fmt::Display,
    hash::BuildHasher,
};

use crate::{
    error::Result,
    redaction::{redactor::Redactor, traits::Redact},
    value::Value,
};

impl<K, V> Redact for BTreeMap<K, V>
where
    K: Display,
    V: Redact,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        // NOTE: Map keys are not redacted. Only values are redacted.
        self.iter()
            .map(|(key, value)| Ok((key.to_string(), value.redact_with(redactor)?)))
            .collect::<Result<Vec<_>>>()
            .map(Value::Map)
    }
}

impl<K, V, S> Redact for HashMap<K, V, S>
where
    K: Display,
    V: Redact,
    S: BuildHasher,
{
    fn redact_with(&self, redactor: &mut Redactor) -> Result<Value> {
        // NOTE: Map keys are not redacted. Entries are sorted by rendered key so
        // hasher state never leaks into the output order.
        let mut entries = self
            .iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect::<Vec<_>>();
        entries.sort_by(|(left, _), (right, _)| left.cmp(right));
        entries
            .into_iter()
            .map(|(key, value)| Ok((key, value.redact_with(redactor)?)))
            .collect::<Result<Vec<_>>>()
            .map(Value::Map)
    }
}
