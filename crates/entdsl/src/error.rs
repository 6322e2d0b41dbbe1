use derive_more::Display;
use entdsl_config_build::ConfigError;
use entdsl_core::ConvertError;
use entdsl_primitives::UnknownTypeError;
use entdsl_schema::{ErrorClass, SchemaError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax)
    }

    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self.kind, ErrorKind::Internal)
    }
}

impl From<UnknownTypeError> for Error {
    fn from(err: UnknownTypeError) -> Self {
        Self::new(ErrorKind::Integrity, ErrorOrigin::Types, err.to_string())
    }
}

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        let origin = match &err {
            SchemaError::Syntax { .. } | SchemaError::UnknownAnnotation { .. } => {
                ErrorOrigin::Annotation
            }
            SchemaError::UnknownType(_) => ErrorOrigin::Types,
            SchemaError::EmptyEntityName
            | SchemaError::EmptyFieldName { .. }
            | SchemaError::DuplicateEntity { .. }
            | SchemaError::DuplicateField { .. } => ErrorOrigin::Schema,
        };

        Self::new(err.class().into(), origin, err.to_string())
    }
}

impl From<ConvertError> for Error {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::Schema(err) => err.into(),
            err => Self::new(err.class().into(), ErrorOrigin::Convert, err.to_string()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Malformed annotation text.
    Syntax,

    /// Well-formed input describing an inconsistent model.
    Integrity,

    /// Configuration could not be read or is invalid.
    Config,

    /// The caller cannot remediate this.
    Internal,
}

impl From<ErrorClass> for ErrorKind {
    fn from(class: ErrorClass) -> Self {
        match class {
            ErrorClass::Syntax => Self::Syntax,
            ErrorClass::Integrity => Self::Integrity,
            ErrorClass::InvariantViolation => Self::Internal,
        }
    }
}

///
/// ErrorOrigin
/// Layer that raised the error.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Types,
    Annotation,
    Schema,
    Convert,
    Config,
}

///
/// TESTS
///
