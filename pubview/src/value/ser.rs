//! `Serialize` for the value tree.
//!
//! Records serialize as serde structs so `quick-xml` can use the record name
//! as the element name; `serde_json` renders them as objects.

use serde::ser::{
    Serialize, SerializeMap, SerializeStruct, SerializeStructVariant, SerializeTupleVariant,
    Serializer,
};

use super::{Payload, Value, Variant};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::UInt(value) => serializer.serialize_u64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Str(value) => serializer.serialize_str(value),
            Self::Seq(items) => serializer.collect_seq(items),
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Record(record) => {
                let mut state = serializer.serialize_struct(record.name(), record.len())?;
                for field in record.fields() {
                    state.serialize_field(field.name, &field.value)?;
                }
                state.end()
            }
            Self::Variant(variant) => variant.serialize(serializer),
        }
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Self {
            enum_name,
            index,
            name,
            payload,
        } = self;
        match payload {
            Payload::Unit => serializer.serialize_unit_variant(enum_name, *index, name),
            Payload::Newtype(value) => {
                serializer.serialize_newtype_variant(enum_name, *index, name, value)
            }
            Payload::Tuple(items) => {
                let mut state =
                    serializer.serialize_tuple_variant(enum_name, *index, name, items.len())?;
                for item in items {
                    state.serialize_field(item)?;
                }
                state.end()
            }
            Payload::Struct(fields) => {
                let mut state =
                    serializer.serialize_struct_variant(enum_name, *index, name, fields.len())?;
                for field in fields {
                    state.serialize_field(field.name, &field.value)?;
                }
                state.end()
            }
        }
    }
}
