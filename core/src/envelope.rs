//! Response envelope normalization.
//!
//! Some endpoints answer with the payload at the top level, others wrap it as
//! `{"data": {...}, "meta_data": {...}}`. `flatten` turns both shapes into the
//! flat form the response records bind against, for every endpoint alike.

use serde_json::{Map, Value};

/// A decoded JSON object.
pub type JsonObject = Map<String, Value>;

/// Unwrap a `data` envelope, carrying the outer `meta_data` into the payload.
///
/// When `data` is missing or not an object the input is returned unchanged.
/// An outer `meta_data` replaces any `meta_data` inside `data`.
pub fn flatten(mut raw: JsonObject) -> JsonObject {
    match raw.remove("data") {
        Some(Value::Object(mut inner)) => {
            if let Some(meta) = raw.remove("meta_data") {
                inner.insert("meta_data".to_string(), meta);
            }
            inner
        }
        Some(other) => {
            raw.insert("data".to_string(), other);
            raw
        }
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn unwraps_data_and_carries_meta_data() {
        let raw = object(json!({"data": {"email": "x@y.com"}, "meta_data": {"a": 1}}));
        let flat = flatten(raw);
        assert_eq!(
            Value::Object(flat),
            json!({"email": "x@y.com", "meta_data": {"a": 1}})
        );
    }

    #[test]
    fn outer_meta_data_overwrites_inner() {
        let raw = object(json!({
            "data": {"domain": "techcorp.com", "meta_data": {"inner": true}},
            "meta_data": {"outer": true}
        }));
        let flat = flatten(raw);
        assert_eq!(flat["meta_data"], json!({"outer": true}));
        assert_eq!(flat["domain"], "techcorp.com");
    }

    #[test]
    fn data_without_meta_data_keeps_inner_only() {
        let raw = object(json!({"data": {"domain": "techcorp.com"}, "status": 1}));
        let flat = flatten(raw);
        assert_eq!(Value::Object(flat), json!({"domain": "techcorp.com"}));
    }

    #[test]
    fn flat_payload_is_unchanged() {
        let raw = object(json!({"domain": "techcorp.com", "query": "TechCorp", "credit_count": 1}));
        let flat = flatten(raw.clone());
        assert_eq!(flat, raw);
    }

    #[test]
    fn non_object_data_is_left_in_place() {
        let raw = object(json!({"data": ["a", "b"], "meta_data": {"a": 1}}));
        let flat = flatten(raw.clone());
        assert_eq!(flat, raw);

        let raw = object(json!({"data": null}));
        assert_eq!(flatten(raw.clone()), raw);
    }
}
