use std::fmt;

/// The bound a field value failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The value must be strictly greater than zero.
    MustBePositive { value: i64 },
    /// The value must lie in `min..=max`.
    OutOfRange { value: i64, min: i64, max: i64 },
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::MustBePositive { value } => {
                write!(f, "must be greater than 0, got {value}")
            }
            ValidationErrorKind::OutOfRange { value, min, max } => {
                write!(f, "must be between {min} and {max}, got {value}")
            }
        }
    }
}

/// A field-level constraint violation raised while constructing a schema value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid `{field}`: {kind}")]
pub struct ValidationError {
    field: &'static str,
    kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: &'static str, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn must_be_positive(field: &'static str, value: i64) -> Self {
        Self::new(field, ValidationErrorKind::MustBePositive { value })
    }

    pub fn out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::new(field, ValidationErrorKind::OutOfRange { value, min, max })
    }

    /// Name of the offending field, as it appears on the wire.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }
}

/// Errors produced by the shared schema types.
///
/// - `Validation`: a value was well-typed but violated a declared constraint.
/// - `Decoding`: a textual value could not be parsed into the target type
///   (for instance an unknown sort order literal).
///
/// Example:
/// ```
/// use api_schema_commons::{PageOptions, SchemaError};
///
/// match PageOptions::new(Some(1), Some(1001), None, None) {
///     Err(SchemaError::Validation(e)) => assert_eq!(e.field(), "limit"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Decoding(String),
}

impl SchemaError {
    pub fn decoding(message: impl Into<String>) -> Self {
        Self::Decoding(message.into())
    }

    /// The offending field, when the error is a validation failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SchemaError::Validation(e) => Some(e.field()),
            SchemaError::Decoding(_) => None,
        }
    }
}
