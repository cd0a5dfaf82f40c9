//! Validation failures that are not HTTP-aware on their own: input coercion
//! mismatches and specification documents that fail schema validation.

/// Common view over validation failures, so handling code can treat a
/// coercion mismatch and a schema violation alike.
pub trait ValidationFailure: std::error::Error {
    /// Human-readable description of the violation.
    fn message(&self) -> String;

    /// Location of the offending value, if known.
    fn instance_path(&self) -> Option<&str>;
}

/// A request value could not be coerced to its declared schema type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Wrong type, expected '{schema_type}' for {parameter_type} parameter '{parameter_name}'"
)]
pub struct TypeValidationError {
    pub schema_type: String,
    /// Parameter location: `query`, `path`, `header`, `formData`, ...
    pub parameter_type: String,
    pub parameter_name: String,
}

impl TypeValidationError {
    #[must_use]
    pub fn new(
        schema_type: impl Into<String>,
        parameter_type: impl Into<String>,
        parameter_name: impl Into<String>,
    ) -> Self {
        Self {
            schema_type: schema_type.into(),
            parameter_type: parameter_type.into(),
            parameter_name: parameter_name.into(),
        }
    }
}

impl ValidationFailure for TypeValidationError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn instance_path(&self) -> Option<&str> {
        Some(&self.parameter_name)
    }
}

/// The API specification document itself is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid specification: {message}")]
#[must_use]
pub struct InvalidSpecification {
    message: String,
    instance_path: Option<String>,
    schema_path: Option<String>,
}

impl InvalidSpecification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            instance_path: None,
            schema_path: None,
        }
    }

    pub fn with_instance_path(mut self, path: impl Into<String>) -> Self {
        self.instance_path = Some(path.into());
        self
    }

    pub fn with_schema_path(mut self, path: impl Into<String>) -> Self {
        self.schema_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn schema_path(&self) -> Option<&str> {
        self.schema_path.as_deref()
    }
}

impl From<jsonschema::ValidationError<'_>> for InvalidSpecification {
    fn from(err: jsonschema::ValidationError<'_>) -> Self {
        Self::new(err.to_string())
            .with_instance_path(err.instance_path().to_string())
            .with_schema_path(err.schema_path().to_string())
    }
}

impl ValidationFailure for InvalidSpecification {
    fn message(&self) -> String {
        self.message.clone()
    }

    fn instance_path(&self) -> Option<&str> {
        self.instance_path.as_deref()
    }
}
