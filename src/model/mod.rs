//! Model serialization framework.
//!
//! Every API record is a [`Model`]: typed accessors over declared fields,
//! backed by the [`RawFields`] it was constructed from. Serializing a model
//! writes its raw fields back out, so unknown keys and the difference between
//! an absent key and an explicit `null` survive a round trip.
//!
//! Parsing is lenient about enum membership and required fields; callers who
//! want strictness call [`Validate::validate`].

mod builder;
mod enums;
mod nullable;
mod raw;
mod validate;
mod variant;

pub use builder::{Builder, TypedFields};
pub use enums::{ApiEnum, WireEnum};
pub use nullable::Nullable;
pub use raw::RawFields;
pub use validate::{check, require, require_valid, Validate};
pub use variant::{resolve_variant, VariantRule};

use crate::errors::ModelError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Shared contract of every generated record.
pub trait Model:
    Validate + Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Sized
{
    /// Name used in error messages.
    const NAME: &'static str;

    /// Projects declared fields out of `raw` and keeps `raw` as-is.
    fn from_raw(raw: RawFields) -> Result<Self, ModelError>;

    /// Builds from a builder's raw fields plus the values it was given in
    /// typed form. Models without polymorphic fields ignore the latter.
    fn from_parts(raw: RawFields, typed: TypedFields) -> Result<Self, ModelError> {
        let _ = typed;
        Self::from_raw(raw)
    }

    fn raw(&self) -> &RawFields;

    fn from_json(value: Value) -> Result<Self, ModelError> {
        Self::from_raw(RawFields::from_value(Self::NAME, value)?)
    }

    fn to_json(&self) -> Value {
        self.raw().to_value()
    }

    /// Whether `key` was on the wire, including as an explicit `null`.
    fn has_field(&self, key: &str) -> bool {
        self.raw().contains(key)
    }

    fn builder() -> Builder<Self> {
        Builder::new()
    }

    /// Starts a builder from a copy of this model's raw fields.
    fn to_builder(&self) -> Builder<Self> {
        Builder::from_raw(self.raw().clone())
    }
}

/// Implements `Serialize`/`Deserialize` for models in terms of [`Model`].
#[macro_export]
macro_rules! impl_model_serde {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::serde::Serialize for $ty {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize($crate::model::Model::raw(self), serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::model::Model>::from_json(value).map_err(::serde::de::Error::custom)
            }
        }
    )+};
}

/// Import this to get model traits and the builder in scope.
pub mod prelude {
    pub use super::{ApiEnum, Builder, Model, Nullable, RawFields, Validate, WireEnum};
}
