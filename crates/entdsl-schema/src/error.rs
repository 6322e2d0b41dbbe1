use entdsl_primitives::UnknownTypeError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Errors raised while parsing annotations and assembling the input model.
/// Syntax errors carry the offending fragment for diagnostics.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("{kind}: '{fragment}'")]
    Syntax {
        kind: SyntaxErrorKind,
        fragment: String,
    },

    #[error("unknown annotation '{name}'")]
    UnknownAnnotation { name: String },

    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),

    #[error("entity name is empty")]
    EmptyEntityName,

    #[error("entity '{entity}' has a field with an empty name")]
    EmptyFieldName { entity: String },

    #[error("duplicate entity name '{name}'")]
    DuplicateEntity { name: String },

    #[error("entity '{entity}' declares field '{field}' more than once")]
    DuplicateField { entity: String, field: String },
}

impl SchemaError {
    pub(crate) fn syntax(kind: SyntaxErrorKind, fragment: impl Into<String>) -> Self {
        Self::Syntax {
            kind,
            fragment: fragment.into(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Syntax { .. } => ErrorClass::Syntax,
            _ => ErrorClass::Integrity,
        }
    }

    /// Syntax error kind, if this is a syntax error.
    #[must_use]
    pub const fn syntax_kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            Self::Syntax { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

///
/// SyntaxErrorKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntaxErrorKind {
    MismatchedBracket,
    TrailingContent,
    EmptyBlock,
    MissingSigil,
    EmptyParameter,
    UnclosedParameter,
    ParameterRequired,
    ParameterNotAllowed,
    InvalidDecimal,
    InvalidInteger,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MismatchedBracket => "mismatched bracket",
            Self::TrailingContent => "trailing content",
            Self::EmptyBlock => "no annotation in block",
            Self::MissingSigil => "annotation must start with @",
            Self::EmptyParameter => "parameter required",
            Self::UnclosedParameter => "unclosed parameter list",
            Self::ParameterRequired => "parameter required for this annotation",
            Self::ParameterNotAllowed => "parameter not allowed for this annotation",
            Self::InvalidDecimal => "decimal parameter expected",
            Self::InvalidInteger => "integer parameter expected",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorClass
/// Coarse classification shared by every layer of the front end.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Syntax,
    Integrity,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Syntax => "syntax",
            Self::Integrity => "integrity",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}
