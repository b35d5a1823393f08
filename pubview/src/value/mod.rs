//! The redacted value tree.
//!
//! [`Value`] is what every [`Redact`](crate::Redact) impl produces and what the
//! encoders hand to the marshaling libraries. It mirrors the serde data model
//! closely enough to serialize losslessly into JSON and XML:
//!
//! - **`Record`**: a named struct with ordered named fields. The name becomes
//!   the XML element; suppressed fields are simply never pushed.
//! - **`Map`**: string-keyed entries in insertion order.
//! - **`Variant`**: an enum variant with its payload shape preserved.
//!
//! - **`ser`**: `Serialize for Value`
//! - **`capture`**: a `Serializer` producing a `Value` from any `Serialize` type,
//!   used for verbatim public views and opaque leaves

mod capture;
mod ser;

use std::fmt;

pub(crate) use capture::capture;

/// A serialization-safe value tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(Vec<(String, Value)>),
    Record(Record),
    Variant(Box<Variant>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` when `#[pubview(omit_empty)]` would drop this value:
    /// null, `false`, zero, the empty string, or an empty sequence or map.
    ///
    /// Records and variants are never empty.
    #[allow(clippy::float_cmp)]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(value) => !value,
            Self::Int(value) => *value == 0,
            Self::UInt(value) => *value == 0,
            Self::Float(value) => *value == 0.0,
            Self::Str(value) => value.is_empty(),
            Self::Seq(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Record(_) | Self::Variant(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Looks up a field of a record or an entry of a map by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Record(record) => record.get(key),
            Self::Map(entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Variant> for Value {
    fn from(variant: Variant) -> Self {
        Self::Variant(Box::new(variant))
    }
}

/// Renders the tree as compact JSON, so it can be logged with `%value`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// A named composite with ordered fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    name: &'static str,
    fields: Vec<Field>,
}

/// One visible field of a [`Record`] or struct variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: Value,
}

impl Record {
    pub fn new(name: &'static str) -> Self {
        Self::with_capacity(name, 0)
    }

    pub fn with_capacity(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    pub fn push(&mut self, name: &'static str, value: Value) {
        self.fields.push(Field { name, value });
    }

    /// Pushes the field unless [`Value::is_empty`] holds for `value`.
    pub fn push_unless_empty(&mut self, name: &'static str, value: Value) {
        if !value.is_empty() {
            self.push(name, value);
        }
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }
}

/// An enum variant with its payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    pub enum_name: &'static str,
    pub index: u32,
    pub name: &'static str,
    pub payload: Payload,
}

/// Payload shape of a [`Variant`].
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Unit,
    Newtype(Value),
    Tuple(Vec<Value>),
    Struct(Vec<Field>),
}

impl Variant {
    pub fn unit(enum_name: &'static str, index: u32, name: &'static str) -> Self {
        Self {
            enum_name,
            index,
            name,
            payload: Payload::Unit,
        }
    }

    pub fn newtype(enum_name: &'static str, index: u32, name: &'static str, value: Value) -> Self {
        Self {
            enum_name,
            index,
            name,
            payload: Payload::Newtype(value),
        }
    }

    pub fn tuple(
        enum_name: &'static str,
        index: u32,
        name: &'static str,
        items: Vec<Value>,
    ) -> Self {
        Self {
            enum_name,
            index,
            name,
            payload: Payload::Tuple(items),
        }
    }

    /// Builds a struct variant from a record whose name is the variant name.
    pub fn record(enum_name: &'static str, index: u32, record: Record) -> Self {
        Self {
            enum_name,
            index,
            name: record.name,
            payload: Payload::Struct(record.fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Payload, Record, Value, Variant};

    #[test]
    fn emptiness_follows_omit_empty_rules() {
        assert!(Value::Null.is_empty());
        assert!(Value::Bool(false).is_empty());
        assert!(Value::Int(0).is_empty());
        assert!(Value::Str(String::new()).is_empty());
        assert!(Value::Seq(Vec::new()).is_empty());
        assert!(!Value::Str("x".into()).is_empty());
        assert!(!Value::Record(Record::new("Empty")).is_empty());
    }

    #[test]
    fn push_unless_empty_drops_empty_values() {
        let mut record = Record::new("User");
        record.push_unless_empty("nickname", Value::Str(String::new()));
        record.push_unless_empty("name", Value::from("Buster"));
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("name"), Some(&Value::from("Buster")));
        assert_eq!(record.get("nickname"), None);
    }

    #[test]
    fn get_looks_into_records_and_maps() {
        let map = Value::Map(vec![("k".to_owned(), Value::Int(1))]);
        assert_eq!(map.get("k"), Some(&Value::Int(1)));
        assert_eq!(Value::Int(1).get("k"), None);
    }

    #[test]
    fn display_is_compact_json() {
        let mut record = Record::new("User");
        record.push("id", Value::from("1"));
        record.push("tags", Value::Seq(vec![Value::Int(1), Value::Null]));
        assert_eq!(
            Value::Record(record).to_string(),
            r#"{"id":"1","tags":[1,null]}"#
        );
    }

    #[test]
    fn record_variant_takes_record_name() {
        let mut record = Record::new("Moved");
        record.push("x", Value::Int(3));
        let variant = Variant::record("Event", 1, record);
        assert_eq!(variant.name, "Moved");
        assert!(matches!(variant.payload, Payload::Struct(ref fields) if fields.len() == 1));
    }
}
