use crate::errors::{ValidationError, ValidationErrorKind};
use crate::model::Validate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A closed set of enum members known when the client was built, each with
/// its wire string.
pub trait WireEnum: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn as_wire(self) -> &'static str;

    fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_wire() == raw)
    }
}

/// Declares a [`WireEnum`] with its wire strings.
///
/// ```ignore
/// wire_enum! {
///     pub enum AccountType {
///         Checking => "checking",
///         Savings => "savings",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::model::WireEnum for $name {
            const ALL: &'static [Self] = &[$( Self::$variant ),+];

            fn as_wire(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::model::WireEnum::as_wire(*self))
            }
        }
    };
}

/// An enum value as seen on the wire: either a member the client knows, or
/// any other string the server sent.
///
/// Parsing never fails on an unrecognized string; [`Validate::validate`] is
/// where membership is enforced. Equality and hashing use the wire string, so
/// `Known(Active)` equals `Raw("active")`.
#[derive(Clone)]
pub enum ApiEnum<K: WireEnum> {
    Known(K),
    Raw(String),
}

impl<K: WireEnum> ApiEnum<K> {
    /// Wraps a wire string, recognizing it when it names a known member.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match K::from_wire(&raw) {
            Some(known) => ApiEnum::Known(known),
            None => ApiEnum::Raw(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ApiEnum::Known(known) => known.as_wire(),
            ApiEnum::Raw(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<K> {
        match self {
            ApiEnum::Known(known) => Some(*known),
            ApiEnum::Raw(raw) => K::from_wire(raw),
        }
    }

    pub fn is_known(&self) -> bool {
        self.known().is_some()
    }
}

impl<K: WireEnum> From<K> for ApiEnum<K> {
    fn from(known: K) -> Self {
        ApiEnum::Known(known)
    }
}

impl<K: WireEnum> PartialEq for ApiEnum<K> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<K: WireEnum> Eq for ApiEnum<K> {}

impl<K: WireEnum> Hash for ApiEnum<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<K: WireEnum> fmt::Debug for ApiEnum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiEnum::Known(known) => write!(f, "Known({:?})", known),
            ApiEnum::Raw(raw) => write!(f, "Raw({:?})", raw),
        }
    }
}

impl<K: WireEnum> fmt::Display for ApiEnum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<K: WireEnum> Validate for ApiEnum<K> {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.is_known() {
            return Ok(());
        }
        Err(ValidationError::new(ValidationErrorKind::InvalidEnumValue {
            value: self.as_str().to_string(),
            expected: K::ALL.iter().map(|member| member.as_wire()).collect(),
        }))
    }
}

impl<K: WireEnum> Serialize for ApiEnum<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, K: WireEnum> Deserialize<'de> for ApiEnum<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ApiEnum::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::wire_enum! {
        enum Color {
            Red => "red",
            Green => "green",
        }
    }

    #[test]
    fn test_known_and_raw_compare_by_wire_string() {
        let known: ApiEnum<Color> = Color::Red.into();
        let raw: ApiEnum<Color> = ApiEnum::Raw("red".to_string());
        assert_eq!(known, raw);
        assert_eq!(raw.known(), Some(Color::Red));
        assert_ne!(known, ApiEnum::from_raw("green"));
    }

    #[test]
    fn test_unknown_value_parses_and_fails_validation() {
        let value: ApiEnum<Color> = serde_json::from_value(json!("ultraviolet")).unwrap();
        assert_eq!(value.as_str(), "ultraviolet");
        assert!(!value.is_known());

        let err = value.validate().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::InvalidEnumValue {
                value: "ultraviolet".to_string(),
                expected: vec!["red", "green"],
            }
        );
        assert_eq!(serde_json::to_value(&value).unwrap(), json!("ultraviolet"));
    }

    #[test]
    fn test_non_string_is_rejected() {
        assert!(serde_json::from_value::<ApiEnum<Color>>(json!(3)).is_err());
    }

    #[test]
    fn test_display_uses_wire_string() {
        assert_eq!(Color::Green.to_string(), "green");
        assert_eq!(ApiEnum::<Color>::from_raw("teal").to_string(), "teal");
    }
}
