use crate::errors::ValidationError;
use crate::model::Nullable;

/// Opt-in strictness check, run after a model has been built or parsed.
///
/// Checks stop at the first violation, visiting fields in declaration order.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Nullable<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Nullable::Value(value) => value.validate(),
            _ => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        for (index, item) in self.iter().enumerate() {
            item.validate().map_err(|e| e.at_index(index))?;
        }
        Ok(())
    }
}

/// Fails with a missing-field error when a required field is unset.
pub fn require<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T, ValidationError> {
    value.as_ref().ok_or_else(|| ValidationError::missing(field))
}

/// Validates a nested value, prefixing any error with the field name.
pub fn check<T: Validate + ?Sized>(field: &str, value: &T) -> Result<(), ValidationError> {
    value.validate().map_err(|e| e.within(field))
}

/// Shorthand for a required field whose value must itself validate.
pub fn require_valid<T: Validate>(field: &str, value: &Option<T>) -> Result<(), ValidationError> {
    check(field, require(field, value)?)
}
