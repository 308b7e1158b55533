//! Form body encoding for endpoint parameter records.
//!
//! # Design
//! Parameter records derive `Serialize`; the field walk happens through a
//! serde `Serializer` instead of runtime reflection. Wire names come from the
//! field names (or `#[serde(rename)]`), excluded fields use `#[serde(skip)]`.
//!
//! Omission rules per field value:
//! - strings are sent only when non-empty
//! - integers and floats are sent only when non-zero
//! - booleans are sent as `true` when true and omitted when false
//! - sequences are comma-joined and omitted when the joined text is empty,
//!   so both `[]` and `[""]` are left out
//! - `None` and unit values are omitted
//! - any other value (nested records, maps, data-carrying enum variants) is
//!   sent as compact JSON, omitted when that is `null`, `{}` or `[]`
//!
//! Elements inside a sequence keep their value even when zero or empty, so
//! `[0, 1]` is sent as `0,1`. Non-scalar elements are rendered as compact
//! JSON before joining.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::ser::{self, Impossible, Serialize};
use serde_json::value::Serializer as JsonSerializer;
use serde_json::Value;

use crate::error::{CufError, Result};

/// Flat wire-name to value mapping built from a parameter record.
///
/// Keys are sorted, which makes the rendered body canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedForm {
    fields: BTreeMap<String, String>,
}

impl EncodedForm {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as an `application/x-www-form-urlencoded` body.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Encode a parameter record into its form representation.
///
/// Fails with `CufError::Encoding` when `record` is not a struct or a map.
pub fn encode<T: Serialize + ?Sized>(record: &T) -> Result<EncodedForm> {
    let mut form = EncodedForm::default();
    record.serialize(RecordSerializer { form: &mut form })?;
    Ok(form)
}

fn not_a_record(kind: &str) -> CufError {
    CufError::Encoding(format!("expected a record with named fields, found {kind}"))
}

fn json_error(err: serde_json::Error) -> CufError {
    CufError::Encoding(err.to_string())
}

fn in_field(key: &str, err: CufError) -> CufError {
    match err {
        CufError::Encoding(msg) => CufError::Encoding(format!("field `{key}`: {msg}")),
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Top level: the record itself
// ---------------------------------------------------------------------------

struct RecordSerializer<'a> {
    form: &'a mut EncodedForm,
}

macro_rules! reject_record {
    ($($method:ident($($arg:ty),*) => $kind:literal;)*) => {
        $(fn $method(self, $(_: $arg),*) -> Result<()> {
            Err(not_a_record($kind))
        })*
    };
}

impl<'a> ser::Serializer for RecordSerializer<'a> {
    type Ok = ();
    type Error = CufError;
    type SerializeSeq = Impossible<(), CufError>;
    type SerializeTuple = Impossible<(), CufError>;
    type SerializeTupleStruct = Impossible<(), CufError>;
    type SerializeTupleVariant = Impossible<(), CufError>;
    type SerializeMap = MapFields<'a>;
    type SerializeStruct = StructFields<'a>;
    type SerializeStructVariant = Impossible<(), CufError>;

    reject_record! {
        serialize_bool(bool) => "a boolean";
        serialize_i8(i8) => "an integer";
        serialize_i16(i16) => "an integer";
        serialize_i32(i32) => "an integer";
        serialize_i64(i64) => "an integer";
        serialize_u8(u8) => "an integer";
        serialize_u16(u16) => "an integer";
        serialize_u32(u32) => "an integer";
        serialize_u64(u64) => "an integer";
        serialize_f32(f32) => "a float";
        serialize_f64(f64) => "a float";
        serialize_char(char) => "a character";
        serialize_str(&str) => "a string";
        serialize_bytes(&[u8]) => "bytes";
        serialize_none() => "null";
        serialize_unit() => "unit";
        serialize_unit_struct(&'static str) => "a unit struct";
        serialize_unit_variant(&'static str, u32, &'static str) => "an enum variant";
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()> {
        Err(not_a_record("an enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(not_a_record("a sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(not_a_record("a tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(not_a_record("a tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_a_record("an enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapFields {
            form: self.form,
            key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(StructFields { form: self.form })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_a_record("an enum variant"))
    }
}

struct StructFields<'a> {
    form: &'a mut EncodedForm,
}

impl ser::SerializeStruct for StructFields<'_> {
    type Ok = ();
    type Error = CufError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        let encoded = value
            .serialize(FieldSerializer)
            .map_err(|err| in_field(key, err))?;
        if let Some(text) = encoded {
            self.form.fields.insert(key.to_string(), text);
        }
        Ok(())
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

struct MapFields<'a> {
    form: &'a mut EncodedForm,
    key: Option<String>,
}

impl ser::SerializeMap for MapFields<'_> {
    type Ok = ();
    type Error = CufError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        self.key = Some(key.serialize(ScalarSerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let key = self
            .key
            .take()
            .ok_or_else(|| CufError::Encoding("map value without a key".to_string()))?;
        let encoded = value
            .serialize(FieldSerializer)
            .map_err(|err| in_field(&key, err))?;
        if let Some(text) = encoded {
            self.form.fields.insert(key, text);
        }
        Ok(())
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Field values: apply the omission rules
// ---------------------------------------------------------------------------

struct FieldSerializer;

macro_rules! nonzero_integers {
    ($($method:ident: $ty:ty),*) => {
        $(fn $method(self, v: $ty) -> Result<Option<String>> {
            Ok((v != 0).then(|| v.to_string()))
        })*
    };
}

impl ser::Serializer for FieldSerializer {
    type Ok = Option<String>;
    type Error = CufError;
    type SerializeSeq = SeqJoiner;
    type SerializeTuple = SeqJoiner;
    type SerializeTupleStruct = SeqJoiner;
    type SerializeTupleVariant = JsonText<JsonTupleVariant, Option<String>>;
    type SerializeMap = JsonText<JsonMap, Option<String>>;
    type SerializeStruct = JsonText<JsonStruct, Option<String>>;
    type SerializeStructVariant = JsonText<JsonStructVariant, Option<String>>;

    nonzero_integers! {
        serialize_i8: i8, serialize_i16: i16, serialize_i32: i32, serialize_i64: i64,
        serialize_i128: i128, serialize_u8: u8, serialize_u16: u16, serialize_u32: u32,
        serialize_u64: u64, serialize_u128: u128
    }

    fn serialize_bool(self, v: bool) -> Result<Option<String>> {
        Ok(v.then(|| "true".to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<Option<String>> {
        Ok((v != 0.0).then(|| v.to_string()))
    }

    fn serialize_f64(self, v: f64) -> Result<Option<String>> {
        Ok((v != 0.0).then(|| v.to_string()))
    }

    fn serialize_char(self, v: char) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Option<String>> {
        Ok((!v.is_empty()).then(|| v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Option<String>> {
        Ok((!v.is_empty()).then(|| String::from_utf8_lossy(v).into_owned()))
    }

    fn serialize_none(self) -> Result<Option<String>> {
        Ok(None)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Option<String>> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Option<String>> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Option<String>> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Option<String>> {
        Ok((!variant.is_empty()).then(|| variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Option<String>> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Option<String>> {
        ser::Serializer::serialize_newtype_variant(JsonSerializer, name, index, variant, value)
            .map(FromJson::from_json)
            .map_err(json_error)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqJoiner> {
        Ok(SeqJoiner::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqJoiner> {
        Ok(SeqJoiner::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqJoiner> {
        Ok(SeqJoiner::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        ser::Serializer::serialize_tuple_variant(JsonSerializer, name, index, variant, len)
            .map(JsonText::new)
            .map_err(json_error)
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        ser::Serializer::serialize_map(JsonSerializer, len)
            .map(JsonText::new)
            .map_err(json_error)
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        ser::Serializer::serialize_struct(JsonSerializer, name, len)
            .map(JsonText::new)
            .map_err(json_error)
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        ser::Serializer::serialize_struct_variant(JsonSerializer, name, index, variant, len)
            .map(JsonText::new)
            .map_err(json_error)
    }
}

/// Collects sequence elements and joins them with commas.
struct SeqJoiner {
    items: Vec<String>,
}

impl SeqJoiner {
    fn with_capacity(len: usize) -> Self {
        Self {
            items: Vec::with_capacity(len),
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ScalarSerializer)?);
        Ok(())
    }

    fn finish(self) -> Option<String> {
        let joined = self.items.join(",");
        (!joined.is_empty()).then_some(joined)
    }
}

impl ser::SerializeSeq for SeqJoiner {
    type Ok = Option<String>;
    type Error = CufError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Option<String>> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqJoiner {
    type Ok = Option<String>;
    type Error = CufError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Option<String>> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SeqJoiner {
    type Ok = Option<String>;
    type Error = CufError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Option<String>> {
        Ok(self.finish())
    }
}

// ---------------------------------------------------------------------------
// Scalars: sequence elements and map keys, rendered without omission
// ---------------------------------------------------------------------------

struct ScalarSerializer;

macro_rules! display_scalars {
    ($($method:ident: $ty:ty),*) => {
        $(fn $method(self, v: $ty) -> Result<String> {
            Ok(v.to_string())
        })*
    };
}

impl ser::Serializer for ScalarSerializer {
    type Ok = String;
    type Error = CufError;
    type SerializeSeq = JsonText<JsonSeq, String>;
    type SerializeTuple = JsonText<JsonTuple, String>;
    type SerializeTupleStruct = JsonText<JsonTupleStruct, String>;
    type SerializeTupleVariant = JsonText<JsonTupleVariant, String>;
    type SerializeMap = JsonText<JsonMap, String>;
    type SerializeStruct = JsonText<JsonStruct, String>;
    type SerializeStructVariant = JsonText<JsonStructVariant, String>;

    display_scalars! {
        serialize_bool: bool, serialize_i8: i8, serialize_i16: i16, serialize_i32: i32,
        serialize_i64: i64, serialize_i128: i128, serialize_u8: u8, serialize_u16: u16,
        serialize_u32: u32, serialize_u64: u64, serialize_u128: u128, serialize_f32: f32,
        serialize_f64: f64, serialize_char: char, serialize_str: &str
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(v).into_owned())
    }

    fn serialize_none(self) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<String> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<String> {
        ser::Serializer::serialize_newtype_variant(JsonSerializer, name, index, variant, value)
            .map(FromJson::from_json)
            .map_err(json_error)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        ser::Serializer::serialize_seq(JsonSerializer, len)
            .map(JsonText::new)
            .map_err(json_error)
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        ser::Serializer::serialize_tuple(JsonSerializer, len)
            .map(JsonText::new)
            .map_err(json_error)
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        ser::Serializer::serialize_tuple_struct(JsonSerializer, name, len)
            .map(JsonText::new)
            .map_err(json_error)
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        ser::Serializer::serialize_tuple_variant(JsonSerializer, name, index, variant, len)
            .map(JsonText::new)
            .map_err(json_error)
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        ser::Serializer::serialize_map(JsonSerializer, len)
            .map(JsonText::new)
            .map_err(json_error)
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        ser::Serializer::serialize_struct(JsonSerializer, name, len)
            .map(JsonText::new)
            .map_err(json_error)
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        ser::Serializer::serialize_struct_variant(JsonSerializer, name, index, variant, len)
            .map(JsonText::new)
            .map_err(json_error)
    }
}

// ---------------------------------------------------------------------------
// Non-scalar values: rendered as compact JSON
// ---------------------------------------------------------------------------

type JsonSeq = <JsonSerializer as ser::Serializer>::SerializeSeq;
type JsonTuple = <JsonSerializer as ser::Serializer>::SerializeTuple;
type JsonTupleStruct = <JsonSerializer as ser::Serializer>::SerializeTupleStruct;
type JsonTupleVariant = <JsonSerializer as ser::Serializer>::SerializeTupleVariant;
type JsonMap = <JsonSerializer as ser::Serializer>::SerializeMap;
type JsonStruct = <JsonSerializer as ser::Serializer>::SerializeStruct;
type JsonStructVariant = <JsonSerializer as ser::Serializer>::SerializeStructVariant;

/// Text form of a JSON value for a field (omittable) or an element (kept).
trait FromJson {
    fn from_json(value: Value) -> Self;
}

impl FromJson for Option<String> {
    fn from_json(value: Value) -> Self {
        let empty = match &value {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(members) => members.is_empty(),
            _ => false,
        };
        (!empty).then(|| value.to_string())
    }
}

impl FromJson for String {
    fn from_json(value: Value) -> Self {
        value.to_string()
    }
}

/// Builds a `Value` with serde_json and renders it once complete.
struct JsonText<S, O> {
    inner: S,
    output: PhantomData<O>,
}

impl<S, O> JsonText<S, O> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            output: PhantomData,
        }
    }
}

impl<S, O> ser::SerializeSeq for JsonText<S, O>
where
    S: ser::SerializeSeq<Ok = Value, Error = serde_json::Error>,
    O: FromJson,
{
    type Ok = O;
    type Error = CufError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.inner.serialize_element(value).map_err(json_error)
    }

    fn end(self) -> Result<O> {
        self.inner.end().map(O::from_json).map_err(json_error)
    }
}

impl<S, O> ser::SerializeTuple for JsonText<S, O>
where
    S: ser::SerializeTuple<Ok = Value, Error = serde_json::Error>,
    O: FromJson,
{
    type Ok = O;
    type Error = CufError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.inner.serialize_element(value).map_err(json_error)
    }

    fn end(self) -> Result<O> {
        self.inner.end().map(O::from_json).map_err(json_error)
    }
}

impl<S, O> ser::SerializeTupleStruct for JsonText<S, O>
where
    S: ser::SerializeTupleStruct<Ok = Value, Error = serde_json::Error>,
    O: FromJson,
{
    type Ok = O;
    type Error = CufError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.inner.serialize_field(value).map_err(json_error)
    }

    fn end(self) -> Result<O> {
        self.inner.end().map(O::from_json).map_err(json_error)
    }
}

impl<S, O> ser::SerializeTupleVariant for JsonText<S, O>
where
    S: ser::SerializeTupleVariant<Ok = Value, Error = serde_json::Error>,
    O: FromJson,
{
    type Ok = O;
    type Error = CufError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.inner.serialize_field(value).map_err(json_error)
    }

    fn end(self) -> Result<O> {
        self.inner.end().map(O::from_json).map_err(json_error)
    }
}

impl<S, O> ser::SerializeMap for JsonText<S, O>
where
    S: ser::SerializeMap<Ok = Value, Error = serde_json::Error>,
    O: FromJson,
{
    type Ok = O;
    type Error = CufError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        self.inner.serialize_key(key).map_err(json_error)
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.inner.serialize_value(value).map_err(json_error)
    }

    fn end(self) -> Result<O> {
        self.inner.end().map(O::from_json).map_err(json_error)
    }
}

impl<S, O> ser::SerializeStruct for JsonText<S, O>
where
    S: ser::SerializeStruct<Ok = Value, Error = serde_json::Error>,
    O: FromJson,
{
    type Ok = O;
    type Error = CufError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.inner.serialize_field(key, value).map_err(json_error)
    }

    fn end(self) -> Result<O> {
        self.inner.end().map(O::from_json).map_err(json_error)
    }
}

impl<S, O> ser::SerializeStructVariant for JsonText<S, O>
where
    S: ser::SerializeStructVariant<Ok = Value, Error = serde_json::Error>,
    O: FromJson,
{
    type Ok = O;
    type Error = CufError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.inner.serialize_field(key, value).map_err(json_error)
    }

    fn end(self) -> Result<O> {
        self.inner.end().map(O::from_json).map_err(json_error)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::Serialize;

    use super::*;

    #[derive(Serialize, Default)]
    struct Filters {
        name: String,
        page: u32,
        offset: i64,
        min_score: f64,
        is_school: bool,
        tags: Vec<String>,
        years: Vec<u16>,
        #[serde(rename = "country_code")]
        country: String,
        #[serde(skip)]
        #[allow(dead_code)]
        internal_note: String,
        nickname: Option<String>,
        sort: Option<Sort>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Sort {
        MostFollowed,
    }

    #[test]
    fn default_record_encodes_to_empty_form() {
        let form = encode(&Filters::default()).unwrap();
        assert!(form.is_empty());
        assert_eq!(form.to_query_string(), "");
    }

    #[test]
    fn non_empty_fields_use_wire_names() {
        let filters = Filters {
            name: "TechCorp".to_string(),
            page: 2,
            offset: -5,
            country: "US".to_string(),
            internal_note: "never sent".to_string(),
            nickname: Some("tc".to_string()),
            sort: Some(Sort::MostFollowed),
            ..Filters::default()
        };
        let form = encode(&filters).unwrap();
        assert_eq!(form.get("name"), Some("TechCorp"));
        assert_eq!(form.get("page"), Some("2"));
        assert_eq!(form.get("offset"), Some("-5"));
        assert_eq!(form.get("country_code"), Some("US"));
        assert_eq!(form.get("nickname"), Some("tc"));
        assert_eq!(form.get("sort"), Some("most_followed"));
        assert!(!form.contains_key("country"));
        assert!(!form.contains_key("internal_note"));
        assert_eq!(form.len(), 6);
    }

    #[test]
    fn zero_numbers_and_empty_strings_are_omitted() {
        let filters = Filters {
            name: String::new(),
            page: 0,
            min_score: 0.0,
            nickname: Some(String::new()),
            ..Filters::default()
        };
        let form = encode(&filters).unwrap();
        assert!(!form.contains_key("name"));
        assert!(!form.contains_key("page"));
        assert!(!form.contains_key("min_score"));
        assert!(!form.contains_key("nickname"));
    }

    #[test]
    fn false_is_omitted_and_true_is_sent() {
        let form = encode(&Filters::default()).unwrap();
        assert!(!form.contains_key("is_school"));

        let form = encode(&Filters {
            is_school: true,
            ..Filters::default()
        })
        .unwrap();
        assert_eq!(form.get("is_school"), Some("true"));
    }

    #[test]
    fn floats_use_shortest_representation() {
        let form = encode(&Filters {
            min_score: 1.5,
            ..Filters::default()
        })
        .unwrap();
        assert_eq!(form.get("min_score"), Some("1.5"));

        let form = encode(&Filters {
            min_score: 0.1 + 0.2,
            ..Filters::default()
        })
        .unwrap();
        assert_eq!(form.get("min_score"), Some("0.30000000000000004"));

        let form = encode(&Filters {
            min_score: 3.0,
            ..Filters::default()
        })
        .unwrap();
        assert_eq!(form.get("min_score"), Some("3"));
    }

    #[test]
    fn sequences_are_comma_joined_in_order() {
        let form = encode(&Filters {
            tags: vec!["saas".to_string(), "b2b".to_string(), "ai".to_string()],
            years: vec![0, 2020],
            ..Filters::default()
        })
        .unwrap();
        assert_eq!(form.get("tags"), Some("saas,b2b,ai"));
        assert_eq!(form.get("years"), Some("0,2020"));
    }

    #[test]
    fn empty_sequences_are_omitted() {
        let form = encode(&Filters {
            tags: Vec::new(),
            ..Filters::default()
        })
        .unwrap();
        assert!(!form.contains_key("tags"));

        let form = encode(&Filters {
            tags: vec![String::new()],
            ..Filters::default()
        })
        .unwrap();
        assert!(!form.contains_key("tags"));
    }

    #[test]
    fn query_string_is_sorted_and_escaped() {
        let filters = Filters {
            name: "Tech & Co".to_string(),
            country: "US".to_string(),
            tags: vec!["a b".to_string(), "c".to_string()],
            ..Filters::default()
        };
        let body = encode(&filters).unwrap().to_query_string();
        assert_eq!(body, "country_code=US&name=Tech+%26+Co&tags=a+b%2Cc");
    }

    #[test]
    fn string_keyed_maps_are_records() {
        let mut map = HashMap::new();
        map.insert("query", "TechCorp");
        map.insert("empty", "");
        let form = encode(&map).unwrap();
        assert_eq!(form.get("query"), Some("TechCorp"));
        assert!(!form.contains_key("empty"));
    }

    #[test]
    fn primitives_are_not_records() {
        assert!(matches!(encode(&42), Err(CufError::Encoding(_))));
        assert!(matches!(encode("query"), Err(CufError::Encoding(_))));
        assert!(matches!(encode(&vec![1, 2]), Err(CufError::Encoding(_))));
        assert!(matches!(encode(&Option::<Filters>::None), Err(CufError::Encoding(_))));
        assert!(matches!(encode(&()), Err(CufError::Encoding(_))));
    }

    #[test]
    fn some_record_is_encoded() {
        let form = encode(&Some(Filters {
            page: 3,
            ..Filters::default()
        }))
        .unwrap();
        assert_eq!(form.get("page"), Some("3"));
    }

    #[test]
    fn nested_records_are_sent_as_compact_json() {
        #[derive(Serialize, Default)]
        struct Inner {
            city: String,
            radius: u32,
        }
        #[derive(Serialize)]
        enum Bound {
            AtLeast(u32),
        }
        #[derive(Serialize, Default)]
        struct Outer {
            location: Inner,
            labels: BTreeMap<String, u32>,
            bound: Option<Bound>,
            points: Vec<(u8, u8)>,
        }
        let form = encode(&Outer {
            location: Inner {
                city: "Paris".to_string(),
                radius: 0,
            },
            labels: BTreeMap::from([("b".to_string(), 2), ("a".to_string(), 1)]),
            bound: Some(Bound::AtLeast(10)),
            points: vec![(1, 2), (3, 4)],
        })
        .unwrap();
        assert_eq!(form.get("location"), Some(r#"{"city":"Paris","radius":0}"#));
        assert_eq!(form.get("labels"), Some(r#"{"a":1,"b":2}"#));
        assert_eq!(form.get("bound"), Some(r#"{"AtLeast":10}"#));
        assert_eq!(form.get("points"), Some("[1,2],[3,4]"));
    }

    #[test]
    fn empty_nested_values_are_omitted() {
        #[derive(Serialize)]
        struct Empty {}
        #[derive(Serialize)]
        struct Outer {
            nothing: Empty,
            labels: HashMap<String, u32>,
        }
        let form = encode(&Outer {
            nothing: Empty {},
            labels: HashMap::new(),
        })
        .unwrap();
        assert!(form.is_empty());
    }

    #[test]
    fn encoding_is_deterministic() {
        let filters = Filters {
            name: "TechCorp".to_string(),
            tags: vec!["x".to_string(), "y".to_string()],
            page: 4,
            ..Filters::default()
        };
        let first = encode(&filters).unwrap().to_query_string();
        let second = encode(&filters).unwrap().to_query_string();
        assert_eq!(first, second);
    }
}
