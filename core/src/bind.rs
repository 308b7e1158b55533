//! Projection of a flattened response object onto a typed record.
//!
//! Records are expected to use `#[serde(default)]` at container level, so
//! absent keys keep their zero value and unknown keys are ignored. The object
//! is read through `NullAsZero`, which hands a typed field its zero value when
//! the server sent `null` (including list elements) while raw `Value` and
//! `Map` fields keep the `null` exactly as received. A value whose shape does
//! not match the declared field type fails with `CufError::Bind` naming the
//! top-level field.

use serde::de::value::BorrowedStrDeserializer;
use serde::de::{self, DeserializeOwned, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Value;

use crate::envelope::JsonObject;
use crate::error::{CufError, Result};

type DeResult<T> = std::result::Result<T, serde_json::Error>;

/// Bind `object` into `T`.
pub fn bind<T: DeserializeOwned>(object: JsonObject) -> Result<T> {
    let value = Value::Object(object);
    T::deserialize(NullAsZero(&value)).map_err(|err| {
        let field = match &value {
            Value::Object(object) => offending_field::<T>(object),
            _ => None,
        };
        CufError::Bind {
            field: field.unwrap_or("response").to_string(),
            message: err.to_string(),
        }
    })
}

/// First key (in sorted order) that fails to bind on its own.
fn offending_field<T: DeserializeOwned>(object: &JsonObject) -> Option<&str> {
    object.iter().find_map(|(key, value)| {
        let mut single = JsonObject::new();
        single.insert(key.clone(), value.clone());
        T::deserialize(NullAsZero(&Value::Object(single)))
            .is_err()
            .then_some(key.as_str())
    })
}

const NO_ITEMS: &[Value] = &[];

/// Reads a JSON tree, answering `null` with the zero value of whatever type
/// the target asks for. `deserialize_any` (used by `Value`) still sees `null`.
struct NullAsZero<'a>(&'a Value);

macro_rules! zero_on_null {
    ($($method:ident => $visit:ident($zero:expr)),* $(,)?) => {
        $(fn $method<V: Visitor<'de>>(self, visitor: V) -> DeResult<V::Value> {
            match self.0 {
                Value::Null => visitor.$visit($zero),
                value => value.$method(visitor),
            }
        })*
    };
}

macro_rules! pass_through {
    ($($method:ident),* $(,)?) => {
        $(fn $method<V: Visitor<'de>>(self, visitor: V) -> DeResult<V::Value> {
            self.0.$method(visitor)
        })*
    };
}

impl<'de> Deserializer<'de> for NullAsZero<'de> {
    type Error = serde_json::Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> DeResult<V::Value> {
        match self.0 {
            Value::Array(items) => visitor.visit_seq(Elements(items.iter())),
            Value::Object(members) => visitor.visit_map(Members::new(Some(members))),
            value => value.deserialize_any(visitor),
        }
    }

    zero_on_null! {
        deserialize_bool => visit_bool(false),
        deserialize_i8 => visit_i64(0),
        deserialize_i16 => visit_i64(0),
        deserialize_i32 => visit_i64(0),
        deserialize_i64 => visit_i64(0),
        deserialize_u8 => visit_u64(0),
        deserialize_u16 => visit_u64(0),
        deserialize_u32 => visit_u64(0),
        deserialize_u64 => visit_u64(0),
        deserialize_f32 => visit_f64(0.0),
        deserialize_f64 => visit_f64(0.0),
        deserialize_str => visit_str(""),
        deserialize_string => visit_str(""),
    }

    pass_through! {
        deserialize_char,
        deserialize_bytes,
        deserialize_byte_buf,
        deserialize_unit,
        deserialize_identifier,
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> DeResult<V::Value> {
        match self.0 {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        visitor: V,
    ) -> DeResult<V::Value> {
        self.0.deserialize_unit_struct(name, visitor)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> DeResult<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> DeResult<V::Value> {
        match self.0 {
            Value::Null => visitor.visit_seq(Elements(NO_ITEMS.iter())),
            Value::Array(items) => visitor.visit_seq(Elements(items.iter())),
            value => value.deserialize_seq(visitor),
        }
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> DeResult<V::Value> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> DeResult<V::Value> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> DeResult<V::Value> {
        match self.0 {
            Value::Null => visitor.visit_map(Members::new(None)),
            Value::Object(members) => visitor.visit_map(Members::new(Some(members))),
            value => value.deserialize_map(visitor),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> DeResult<V::Value> {
        match self.0 {
            Value::Null => visitor.visit_map(Members::new(None)),
            Value::Object(members) => visitor.visit_map(Members::new(Some(members))),
            value => value.deserialize_struct(name, fields, visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> DeResult<V::Value> {
        self.0.deserialize_enum(name, variants, visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> DeResult<V::Value> {
        visitor.visit_unit()
    }
}

struct Elements<'a>(std::slice::Iter<'a, Value>);

impl<'de> SeqAccess<'de> for Elements<'de> {
    type Error = serde_json::Error;

    fn next_element_seed<S: DeserializeSeed<'de>>(&mut self, seed: S) -> DeResult<Option<S::Value>> {
        self.0
            .next()
            .map(|item| seed.deserialize(NullAsZero(item)))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.0.len())
    }
}

struct Members<'a> {
    entries: Option<serde_json::map::Iter<'a>>,
    pending: Option<&'a Value>,
}

impl<'a> Members<'a> {
    fn new(members: Option<&'a JsonObject>) -> Self {
        Self {
            entries: members.map(|members| members.iter()),
            pending: None,
        }
    }
}

impl<'de> MapAccess<'de> for Members<'de> {
    type Error = serde_json::Error;

    fn next_key_seed<S: DeserializeSeed<'de>>(&mut self, seed: S) -> DeResult<Option<S::Value>> {
        match self.entries.as_mut().and_then(Iterator::next) {
            Some((key, value)) => {
                self.pending = Some(value);
                seed.deserialize(BorrowedStrDeserializer::new(key.as_str()))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<S: DeserializeSeed<'de>>(&mut self, seed: S) -> DeResult<S::Value> {
        let value = self
            .pending
            .take()
            .ok_or_else(|| <serde_json::Error as de::Error>::custom("value requested before key"))?;
        seed.deserialize(NullAsZero(value))
    }

    fn size_hint(&self) -> Option<usize> {
        self.entries.as_ref().map(|entries| entries.len())
    }
}
