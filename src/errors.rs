use std::fmt;
use thiserror::Error;

/// Errors raised while building a model from wire data.
///
/// These are hard failures: the payload cannot be projected onto the model's
/// declared fields at all. Unknown enum values and missing required fields are
/// not reported here; see [`ValidationError`].
#[derive(Debug, Error)]
pub enum ModelError {
    /// The payload for a model was not a JSON object.
    #[error("expected a JSON object for {model}, found {found}")]
    NotAnObject {
        model: &'static str,
        found: &'static str,
    },
    /// A declared field is present but has the wrong JSON shape.
    #[error("field `{field}` of {model} has an invalid value: {source}")]
    InvalidField {
        model: &'static str,
        field: String,
        #[source]
        source: serde_json::Error,
    },
    /// A value handed to a builder could not be converted to JSON.
    #[error("failed to serialize field `{field}`: {source}")]
    Serialize {
        field: String,
        #[source]
        source: serde_json::Error,
    },
    /// None of the known shapes of a polymorphic field matched the payload.
    #[error("no {model} variant matches payload with keys [{keys}]")]
    UnresolvedVariant { model: &'static str, keys: String },
}

/// Why a model failed [`validate`](crate::model::Validate::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("missing required field")]
    MissingRequired,
    #[error("invalid enum value `{value}`, expected one of [{}]", .expected.join(", "))]
    InvalidEnumValue {
        value: String,
        expected: Vec<&'static str>,
    },
}

/// A validation failure, located by the dotted field path that produced it
/// (e.g. `data.compliance_profile.ssn` or `data[2].status`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    path: String,
    kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            path: String::new(),
            kind,
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(ValidationErrorKind::MissingRequired).within(field)
    }

    /// Prefixes the path with the name of the enclosing field.
    pub fn within(mut self, field: &str) -> Self {
        self.path = if self.path.is_empty() {
            field.to_string()
        } else if self.path.starts_with('[') {
            format!("{}{}", field, self.path)
        } else {
            format!("{}.{}", field, self.path)
        };
        self
    }

    /// Prefixes the path with a list index.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path = if self.path.is_empty() || self.path.starts_with('[') {
            format!("[{}]{}", index, self.path)
        } else {
            format!("[{}].{}", index, self.path)
        };
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorDetail {
    pub error_type: Option<String>,
    pub title: Option<String>,
    pub detail: Option<String>,
}

/// Client-level error types.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("API returned {status}: {}", describe_api_error(.detail, .body))]
    Api {
        status: u16,
        detail: Option<ApiErrorDetail>,
        body: String,
    },
    /// Response body was not valid JSON.
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Response JSON did not fit the expected model.
    #[error("failed to decode response: {0}")]
    Decode(#[from] ModelError),
    /// Explicit validation of a model failed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// The circuit breaker rejected the call without sending it.
    #[error("circuit breaker is open, request not sent")]
    CircuitOpen,
    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
    /// Error with context chain for better debugging.
    #[error("{context}: {source}")]
    WithContext {
        source: Box<ClientError>,
        context: String,
    },
}

fn describe_api_error(detail: &Option<ApiErrorDetail>, body: &str) -> String {
    match detail {
        Some(ApiErrorDetail {
            title: Some(title),
            detail: Some(detail),
            ..
        }) => format!("{} ({})", title, detail),
        Some(ApiErrorDetail {
            title: Some(title), ..
        }) => title.clone(),
        _ => body.to_string(),
    }
}

impl ClientError {
    /// HTTP status of an API error, looking through context wrappers.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::WithContext { source, .. } => source.status(),
            _ => None,
        }
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `ClientError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, ClientError>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F>(self, f: F) -> Result<T, ClientError>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ClientError>,
{
    fn context(self, context: impl Into<String>) -> Result<T, ClientError> {
        self.map_err(|e| ClientError::WithContext {
            source: Box::new(e.into()),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, ClientError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ClientError::WithContext {
            source: Box::new(e.into()),
            context: f(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_path_nesting() {
        let err = ValidationError::missing("ssn")
            .within("compliance_profile")
            .at_index(2)
            .within("data");
        assert_eq!(err.path(), "data[2].compliance_profile.ssn");
        assert_eq!(
            err.to_string(),
            "data[2].compliance_profile.ssn: missing required field"
        );
    }

    #[test]
    fn test_enum_error_message() {
        let err = ValidationError::new(ValidationErrorKind::InvalidEnumValue {
            value: "frozen".to_string(),
            expected: vec!["pending", "active"],
        })
        .within("status");
        assert_eq!(
            err.to_string(),
            "status: invalid enum value `frozen`, expected one of [pending, active]"
        );
    }

    #[test]
    fn test_context_chain_keeps_status() {
        let result: Result<(), ClientError> = Err(ClientError::Api {
            status: 404,
            detail: None,
            body: "not found".to_string(),
        });
        let err = result.context("fetching customer").unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "fetching customer: API returned 404: not found");
    }
}
