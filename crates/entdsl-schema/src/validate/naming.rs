use crate::{error::SchemaError, node::Model};
use std::collections::BTreeSet;

/// Entity names must be non-empty and unique within the model.
pub fn validate_entity_naming(model: &Model) -> Result<(), SchemaError> {
    let mut seen = BTreeSet::new();

    for entity in &model.entities {
        if entity.name.is_empty() {
            return Err(SchemaError::EmptyEntityName);
        }
        if !seen.insert(entity.name.as_str()) {
            return Err(SchemaError::DuplicateEntity {
                name: entity.name.clone(),
            });
        }
    }

    Ok(())
}

/// Field names must be non-empty and unique within their entity.
pub fn validate_field_naming(model: &Model) -> Result<(), SchemaError> {
    for entity in &model.entities {
        let mut seen = BTreeSet::new();

        for field in &entity.fields {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    entity: entity.name.clone(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    entity: entity.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
    }

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn duplicate_entity_names_are_rejected() {
        let model = Model::new("m")
            .with_entity(Entity::new("Car"))
            .with_entity(Entity::new("Car"));

        assert_eq!(
            validate_entity_naming(&model),
            Err(SchemaError::DuplicateEntity {
                name: "Car".to_string()
            })
        );
    }

    #[test]
    fn empty_entity_name_is_rejected() {
        let model = Model::new("m").with_entity(Entity::new(""));
        assert_eq!(
            validate_entity_naming(&model),
            Err(SchemaError::EmptyEntityName)
        );
    }

    #[test]
    fn duplicate_field_names_are_rejected() {
        let model = Model::new("m").with_entity(
            Entity::new("Car")
                .with_field(Field::new("id", NeutralType::Integer))
                .with_field(Field::new("id", NeutralType::String)),
        );

        let err = validate_field_naming(&model).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Integrity);
        assert_eq!(err.to_string(), "entity 'Car' declares field 'id' more than once");
    }

    #[test]
    fn same_field_name_in_different_entities_is_fine() {
        let model = Model::new("m")
            .with_entity(Entity::new("Car").with_field(Field::new("id", NeutralType::Integer)))
            .with_entity(Entity::new("Driver").with_field(Field::new("id", NeutralType::Integer)));

        assert_eq!(crate::validate::validate_model(&model), Ok(()));
    }
}
