use crate::errors::ModelError;
use crate::model::Nullable;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// The wire keys a model was constructed with, in insertion order.
///
/// For a deserialized model this is the whole payload, unknown keys included.
/// For a built model it holds only the keys a caller set explicitly. A key
/// mapped to `null` is different from a missing key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFields(Map<String, Value>);

impl RawFields {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Takes ownership of a JSON object; anything else is rejected.
    pub fn from_value(model: &'static str, value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ModelError::NotAnObject {
                model,
                found: json_kind(&other),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// True when the key is present and explicitly `null`.
    pub fn is_null(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Null))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub(crate) fn remove(&mut self, key: &str) {
        self.0.shift_remove(key);
    }

    /// Projects a required or optional non-nullable field.
    ///
    /// Absent and `null` both read as `None`; the raw entry is left as it was
    /// received so it still round-trips.
    pub fn field<T: DeserializeOwned>(
        &self,
        model: &'static str,
        key: &str,
    ) -> Result<Option<T>, ModelError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode(model, key, value).map(Some),
        }
    }

    /// Projects a nullable optional field, keeping absent and `null` apart.
    pub fn nullable<T: DeserializeOwned>(
        &self,
        model: &'static str,
        key: &str,
    ) -> Result<Nullable<T>, ModelError> {
        match self.0.get(key) {
            None => Ok(Nullable::Absent),
            Some(Value::Null) => Ok(Nullable::Null),
            Some(value) => decode(model, key, value).map(Nullable::Value),
        }
    }
}

fn decode<T: DeserializeOwned>(
    model: &'static str,
    key: &str,
    value: &Value,
) -> Result<T, ModelError> {
    T::deserialize(value).map_err(|source| ModelError::InvalidField {
        model,
        field: key.to_string(),
        source,
    })
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for RawFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawFields {
        RawFields::from_value("Test", value).unwrap()
    }

    #[test]
    fn test_rejects_non_objects() {
        let err = RawFields::from_value("Customer", json!([1, 2])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a JSON object for Customer, found array"
        );
    }

    #[test]
    fn test_field_treats_null_as_unset() {
        let fields = raw(json!({"name": null}));
        let name: Option<String> = fields.field("Test", "name").unwrap();
        assert_eq!(name, None);
        assert!(fields.is_null("name"));
    }

    #[test]
    fn test_nullable_distinguishes_null_from_absent() {
        let fields = raw(json!({"external_id": null}));
        let present: Nullable<String> = fields.nullable("Test", "external_id").unwrap();
        let absent: Nullable<String> = fields.nullable("Test", "label").unwrap();
        assert!(present.is_null());
        assert!(absent.is_absent());
    }

    #[test]
    fn test_type_mismatch_is_hard_error() {
        let fields = raw(json!({"amount": "ten"}));
        let err = fields.field::<i64>("Charge", "amount").unwrap_err();
        assert!(matches!(err, ModelError::InvalidField { ref field, .. } if field == "amount"));
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let fields = raw(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }
}
