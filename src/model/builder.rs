use crate::errors::ModelError;
use crate::model::{Model, Nullable, RawFields};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Values handed to a builder in typed form, keyed by wire name.
///
/// A polymorphic field set through a builder is taken from here on build, so
/// the caller's variant is kept instead of being inferred again from its keys.
#[derive(Default)]
pub struct TypedFields(HashMap<&'static str, Box<dyn Any + Send + Sync>>);

impl TypedFields {
    fn insert<V: Any + Send + Sync>(&mut self, key: &'static str, value: V) {
        self.0.insert(key, Box::new(value));
    }

    fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    /// Projects a nullable field, preferring a typed value over the wire entry.
    pub fn nullable<V: DeserializeOwned + Any>(
        &mut self,
        raw: &RawFields,
        model: &'static str,
        key: &str,
    ) -> Result<Nullable<V>, ModelError> {
        match self.0.remove(key).and_then(|value| value.downcast::<V>().ok()) {
            Some(value) => Ok(Nullable::Value(*value)),
            None => raw.nullable(model, key),
        }
    }
}

impl fmt::Debug for TypedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// Collects explicitly-set wire keys for a model, then builds it.
///
/// Only keys passed to a setter end up in the model's raw fields. Each model
/// adds typed setters through an inherent `impl Builder<ThatModel>`.
pub struct Builder<T> {
    raw: RawFields,
    typed: TypedFields,
    error: Option<ModelError>,
    _model: PhantomData<fn() -> T>,
}

impl<T: Model> Builder<T> {
    pub fn new() -> Self {
        Self::from_raw(RawFields::new())
    }

    pub(crate) fn from_raw(raw: RawFields) -> Self {
        Self {
            raw,
            typed: TypedFields::default(),
            error: None,
            _model: PhantomData,
        }
    }

    /// Writes a value under `key`, replacing any previous entry.
    pub(crate) fn set<V: Serialize + ?Sized>(mut self, key: &'static str, value: &V) -> Self {
        if self.error.is_some() {
            return self;
        }
        self.typed.remove(key);
        match serde_json::to_value(value) {
            Ok(json) => self.raw.insert(key, json),
            Err(source) => {
                self.error = Some(ModelError::Serialize {
                    field: key.to_string(),
                    source,
                })
            }
        }
        self
    }

    /// Non-nullable optional: `None` leaves the key off the wire.
    pub(crate) fn set_optional<V: Serialize>(mut self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(key, &v),
            None => {
                self.raw.remove(key);
                self.typed.remove(key);
                self
            }
        }
    }

    /// Nullable optional: `None` is sent as an explicit `null`.
    pub(crate) fn set_nullable<V: Serialize>(mut self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(key, &v),
            None => {
                self.raw.insert(key, Value::Null);
                self.typed.remove(key);
                self
            }
        }
    }

    /// Nullable optional whose typed value reaches the model untouched.
    pub(crate) fn set_nullable_typed<V>(self, key: &'static str, value: Option<V>) -> Self
    where
        V: Serialize + Any + Send + Sync,
    {
        match value {
            Some(v) => {
                let mut builder = self.set(key, &v);
                if builder.error.is_none() {
                    builder.typed.insert(key, v);
                }
                builder
            }
            None => self.set_nullable::<V>(key, None),
        }
    }

    /// Records the typed form of a value already present in the raw fields.
    pub(crate) fn keep_typed<V: Any + Send + Sync>(mut self, key: &'static str, value: V) -> Self {
        self.typed.insert(key, value);
        self
    }

    /// Removes a key so it is absent from the built model.
    pub fn unset(mut self, key: &str) -> Self {
        self.raw.remove(key);
        self.typed.remove(key);
        self
    }

    /// Sets a key the model does not declare. It is carried verbatim.
    pub fn additional_property(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        self.typed.remove(&key);
        self.raw.insert(key, value);
        self
    }

    pub fn build(self) -> Result<T, ModelError> {
        match self.error {
            Some(err) => Err(err),
            None => T::from_parts(self.raw, self.typed),
        }
    }
}

impl<T: Model> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Builder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("raw", &self.raw)
            .field("typed", &self.typed)
            .field("error", &self.error)
            .finish()
    }
}
