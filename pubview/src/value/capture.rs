//! Verbatim capture of `Serialize` types into a [`Value`].
//!
//! Public views and opaque leaves (timestamps, UUIDs, `serde_json::Value`) are
//! not walked by `Redact`; their own `Serialize` impl is replayed into this
//! serializer instead. Nothing is suppressed on the way.

use serde::ser::{self, Serialize};

use super::{Payload, Record, Value, Variant};
use crate::error::{Error, Result};

/// Captures `value` through its `Serialize` impl.
pub(crate) fn capture<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SeqCapture;
    type SerializeTuple = SeqCapture;
    type SerializeTupleStruct = SeqCapture;
    type SerializeTupleVariant = TupleVariantCapture;
    type SerializeMap = MapCapture;
    type SerializeStruct = RecordCapture;
    type SerializeStructVariant = StructVariantCapture;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| Error::marshal("value", format!("{v} does not fit in 64 bits")))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::UInt(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::UInt(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::UInt(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::UInt(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        u64::try_from(v)
            .map(Value::UInt)
            .map_err(|_| Error::marshal("value", format!("{v} does not fit in 64 bits")))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v.into()))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Str(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Seq(
            v.iter().map(|byte| Value::UInt((*byte).into())).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Ok(Value::Record(Record::new(name)))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Variant::unit(name, variant_index, variant).into())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value> {
        let inner = value.serialize(ValueSerializer)?;
        Ok(Variant::newtype(name, variant_index, variant, inner).into())
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqCapture> {
        Ok(SeqCapture {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqCapture> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqCapture> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<TupleVariantCapture> {
        Ok(TupleVariantCapture {
            enum_name: name,
            index: variant_index,
            name: variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapCapture> {
        Ok(MapCapture {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<RecordCapture> {
        Ok(RecordCapture {
            record: Record::with_capacity(name, len),
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<StructVariantCapture> {
        Ok(StructVariantCapture {
            enum_name: name,
            index: variant_index,
            record: Record::with_capacity(variant, len),
        })
    }
}

struct SeqCapture {
    items: Vec<Value>,
}

impl SeqCapture {
    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }
}

impl ser::SerializeSeq for SeqCapture {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Seq(self.items))
    }
}

impl ser::SerializeTuple for SeqCapture {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Seq(self.items))
    }
}

impl ser::SerializeTupleStruct for SeqCapture {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Seq(self.items))
    }
}

struct TupleVariantCapture {
    enum_name: &'static str,
    index: u32,
    name: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for TupleVariantCapture {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Variant::tuple(self.enum_name, self.index, self.name, self.items).into())
    }
}

struct MapCapture {
    entries: Vec<(String, Value)>,
    next_key: Option<String>,
}

/// Map keys must render as text for both JSON objects and XML element names.
fn key_string(key: Value) -> Result<String> {
    match key {
        Value::Str(key) => Ok(key),
        Value::Bool(key) => Ok(key.to_string()),
        Value::Int(key) => Ok(key.to_string()),
        Value::UInt(key) => Ok(key.to_string()),
        Value::Float(key) => Ok(key.to_string()),
        Value::Variant(variant) if matches!(variant.payload, Payload::Unit) => {
            Ok(variant.name.to_owned())
        }
        other => Err(Error::marshal(
            "value",
            format!("map key must be a string, got {other}"),
        )),
    }
}

impl ser::SerializeMap for MapCapture {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        self.next_key = Some(key_string(key.serialize(ValueSerializer)?)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::marshal("value", "map value serialized before its key"))?;
        self.entries.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.entries))
    }
}

struct RecordCapture {
    record: Record,
}

impl ser::SerializeStruct for RecordCapture {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.record.push(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn skip_field(&mut self, _key: &'static str) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Record(self.record))
    }
}

struct StructVariantCapture {
    enum_name: &'static str,
    index: u32,
    record: Record,
}

impl ser::SerializeStructVariant for StructVariantCapture {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.record.push(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Variant::record(self.enum_name, self.index, self.record).into())
    }
}
