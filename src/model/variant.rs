use crate::errors::ModelError;
use crate::model::RawFields;

/// One candidate shape for a polymorphic field without a type tag.
pub struct VariantRule<T> {
    pub name: &'static str,
    /// Wire keys that must all be present and non-null for this shape.
    pub required: &'static [&'static str],
    pub build: fn(RawFields) -> Result<T, ModelError>,
}

impl<T> VariantRule<T> {
    fn matches(&self, raw: &RawFields) -> bool {
        self.required
            .iter()
            .all(|key| raw.get(key).is_some_and(|value| !value.is_null()))
    }
}

/// Picks the first rule, in slice order, whose required keys are all present.
///
/// The order is part of the contract: a payload carrying several signatures
/// resolves to the earliest rule. A payload matching none is an error.
pub fn resolve_variant<T>(
    model: &'static str,
    raw: RawFields,
    rules: &[VariantRule<T>],
) -> Result<T, ModelError> {
    match rules.iter().find(|rule| rule.matches(&raw)) {
        Some(rule) => {
            tracing::trace!("resolved {} as {} variant", model, rule.name);
            (rule.build)(raw)
        }
        None => Err(ModelError::UnresolvedVariant {
            model,
            keys: raw.keys().collect::<Vec<_>>().join(", "),
        }),
    }
}
