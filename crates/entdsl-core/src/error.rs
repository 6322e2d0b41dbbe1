use entdsl_schema::{ErrorClass, SchemaError};
use thiserror::Error as ThisError;

///
/// ConvertError
///
/// Failure of a resolution run. The first violation aborts the run; no
/// partial model is produced.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ConvertError {
    #[error("entity '{entity}' has no fields, cannot resolve its primary key")]
    EntityHasNoFields { entity: String },

    #[error("entity '{entity}': key field '{field}' must have a neutral type")]
    KeyNotNeutral { entity: String, field: String },

    #[error("entity '{entity}' has {count} @Id fields, exactly one expected")]
    MultiplePrimaryKeys { entity: String, count: usize },

    #[error("entity '{entity}' has no @Id field")]
    NoPrimaryKey { entity: String },

    #[error("no target entity '{target}' for field '{entity}.{field}'")]
    NoTargetEntity {
        entity: String,
        field: String,
        target: String,
    },

    #[error("internal error: no placeholder attribute '{field}' in entity '{entity}'")]
    PlaceholderNotFound { entity: String, field: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("internal error: unknown entity '{entity}'")]
    UnknownEntity { entity: String },

    #[error("internal error: attribute '{field}' of entity '{entity}' was never resolved")]
    UnresolvedPlaceholder { entity: String, field: String },
}

impl ConvertError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Schema(err) => err.class(),
            Self::PlaceholderNotFound { .. }
            | Self::UnknownEntity { .. }
            | Self::UnresolvedPlaceholder { .. } => ErrorClass::InvariantViolation,
            _ => ErrorClass::Integrity,
        }
    }
}
