//! Model-wide checks run before resolution.

pub mod naming;

use crate::{error::SchemaError, node::Model};

/// Validate the input model. Stops at the first violation.
pub fn validate_model(model: &Model) -> Result<(), SchemaError> {
    naming::validate_entity_naming(model)?;
    naming::validate_field_naming(model)?;

    Ok(())
}
