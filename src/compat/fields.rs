//! Explicit field reader used by the canonical builders
//!
//! Builders name every key they read. Anything else in the payload is
//! ignored, which is how unknown keys get dropped.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::presence::Presence;

pub(crate) struct Fields<'a> {
    entity: &'static str,
    prefix: Option<&'static str>,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn of(entity: &'static str, value: &'a Value) -> Result<Self> {
        value
            .as_object()
            .map(|map| Self {
                entity,
                prefix: None,
                map,
            })
            .ok_or(ModelError::UnexpectedShape {
                entity,
                expected: "a JSON object",
            })
    }

    pub fn map(&self) -> &'a Map<String, Value> {
        self.map
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    fn path(&self, key: &str) -> String {
        match self.prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.to_string(),
        }
    }

    fn invalid(&self, key: &str, reason: impl Into<String>) -> ModelError {
        ModelError::InvalidField {
            entity: self.entity,
            field: self.path(key),
            reason: reason.into(),
        }
    }

    /// The raw value under `key`, which must be present
    pub fn raw(&self, key: &str) -> Result<&'a Value> {
        self.map.get(key).ok_or_else(|| ModelError::MissingField {
            entity: self.entity,
            field: self.path(key),
        })
    }

    fn decode<T: DeserializeOwned>(&self, key: &str, value: &'a Value) -> Result<T> {
        T::deserialize(value).map_err(|e| self.invalid(key, e.to_string()))
    }

    /// A field every version carries. Use `Option<T>` for nullable fields:
    /// the key must still be present.
    pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.raw(key)?;
        self.decode(key, value)
    }

    /// An optional member; absent and `null` both read as `None`
    pub fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.decode(key, value).map(Some),
        }
    }

    /// A field only some versions carry; absence reads as `Presence::Unset`
    pub fn widened<T: DeserializeOwned>(&self, key: &str) -> Result<Presence<T>> {
        match self.map.get(key) {
            None => Ok(Presence::Unset),
            Some(value) => self.decode(key, value).map(Presence::Set),
        }
    }

    /// An integer-or-string field, always rendered as a string
    pub fn stringly(&self, key: &str) -> Result<String> {
        let value = self.raw(key)?;
        stringify(value).ok_or_else(|| self.invalid(key, "expected a string or integer"))
    }

    /// Like [`stringly`](Self::stringly), but `null` stays `None`
    pub fn stringly_nullable(&self, key: &str) -> Result<Option<String>> {
        match self.raw(key)? {
            Value::Null => Ok(None),
            value => stringify(value)
                .map(Some)
                .ok_or_else(|| self.invalid(key, "expected a string, integer or null")),
        }
    }

    /// A required nested object
    pub fn nested(&self, key: &'static str) -> Result<Fields<'a>> {
        let value = self.raw(key)?;
        value
            .as_object()
            .map(|map| Fields {
                entity: self.entity,
                prefix: Some(key),
                map,
            })
            .ok_or_else(|| self.invalid(key, "expected an object"))
    }

    /// A required, nullable sub-record
    pub fn nullable_record<T>(
        &self,
        key: &str,
        build: impl FnOnce(&'a Value) -> Result<T>,
    ) -> Result<Option<T>> {
        match self.raw(key)? {
            Value::Null => Ok(None),
            value => build(value).map(Some),
        }
    }

    /// An optional, nullable sub-record
    pub fn optional_record<T>(
        &self,
        key: &str,
        build: impl FnOnce(&'a Value) -> Result<T>,
    ) -> Result<Option<T>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => build(value).map(Some),
        }
    }

    /// A required array, each item built with `build`
    pub fn list<T>(&self, key: &str, build: impl FnMut(&'a Value) -> Result<T>) -> Result<Vec<T>> {
        self.raw(key)?
            .as_array()
            .ok_or_else(|| self.invalid(key, "expected an array"))?
            .iter()
            .map(build)
            .collect()
    }
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stringly_accepts_both_representations() {
        let value = json!({"as_int": 301, "as_str": "301", "null": null, "flag": true});
        let f = Fields::of("Test", &value).unwrap();

        assert_eq!(f.stringly("as_int").unwrap(), "301");
        assert_eq!(f.stringly("as_str").unwrap(), "301");
        assert_eq!(f.stringly_nullable("null").unwrap(), None);
        assert!(f.stringly("flag").is_err());
        assert!(matches!(f.stringly("nope"), Err(ModelError::MissingField { .. })));
    }

    #[test]
    fn test_widened_distinguishes_absent_from_null() {
        let value = json!({"present_null": null});
        let f = Fields::of("Test", &value).unwrap();

        let null: Presence<Option<String>> = f.widened("present_null").unwrap();
        let absent: Presence<Option<String>> = f.widened("absent").unwrap();
        assert_eq!(null, Presence::Set(None));
        assert_eq!(absent, Presence::Unset);
    }

    #[test]
    fn test_nested_paths_in_errors() {
        let value = json!({"address": {"city": "千代田区"}});
        let f = Fields::of("NTACorporateInfo", &value).unwrap();
        let err = f.nested("address").unwrap().required::<String>("prefecture").unwrap_err();
        assert_eq!(err.to_string(), "NTACorporateInfo: missing field `address.prefecture`");
    }

    #[test]
    fn test_required_nullable_needs_key() {
        let value = json!({"name_image_id": null});
        let f = Fields::of("Test", &value).unwrap();
        assert_eq!(f.required::<Option<String>>("name_image_id").unwrap(), None);
        assert!(f.required::<Option<String>>("address_image_id").is_err());
    }

    #[test]
    fn test_non_object_payload() {
        let value = json!(["not", "an", "object"]);
        assert!(matches!(
            Fields::of("Test", &value),
            Err(ModelError::UnexpectedShape { .. })
        ));
    }
}
