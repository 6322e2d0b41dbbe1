use entdsl_schema::prelude::*;

///
/// CarFleet
///
/// Test-only helpers building the car/driver/group model: a mutual
/// single-valued reference between `Car` and `Driver`, and a collection
/// reference from `Group` to `Driver`. Entities are declared out of
/// alphabetical order on purpose.
///

pub struct CarFleet;

impl CarFleet {
    ///
    /// model
    ///
    /// Full fleet model in declaration order `Car`, `Driver`, `Group`.
    ///
    pub fn model() -> Model {
        Model::new("fleet")
            .with_description("cars and their drivers")
            .with_entity(Self::car())
            .with_entity(Self::driver())
            .with_entity(Self::group())
    }

    pub fn car() -> Entity {
        Entity::new("Car")
            .with_field(key_field("id", NeutralType::Integer))
            .with_field(
                Field::new("name", NeutralType::String)
                    .with_annotation(AnnotationRecord::flag(AnnotationName::NotNull))
                    .with_annotation(AnnotationRecord::integer(AnnotationName::SizeMax, 40)),
            )
            .with_field(Field::new("driver", FieldTypeRef::entity("Driver")))
    }

    pub fn driver() -> Entity {
        Entity::new("Driver")
            .with_field(
                key_field("code", NeutralType::String)
                    .with_annotation(AnnotationRecord::integer(AnnotationName::SizeMax, 20)),
            )
            .with_field(Field::new("firstName", NeutralType::String))
            .with_field(Field::new("lastName", NeutralType::String))
            .with_field(Field::new("car", FieldTypeRef::entity("Car")))
    }

    pub fn group() -> Entity {
        Entity::new("Group")
            .with_field(key_field("id", NeutralType::Integer))
            .with_field(Field::new("name", NeutralType::String))
            .with_field(
                Field::new("drivers", FieldTypeRef::entity("Driver"))
                    .with_cardinality(CARDINALITY_MANY),
            )
    }
}

/// Single `@Id` field.
pub fn key_field(name: &str, ty: NeutralType) -> Field {
    Field::new(name, ty).with_annotation(AnnotationRecord::flag(AnnotationName::Id))
}

/// Entity with only a key and a single-valued reference to `target`.
pub fn referencing(name: &str, field: &str, target: &str) -> Entity {
    Entity::new(name)
        .with_field(key_field("id", NeutralType::Integer))
        .with_field(Field::new(field, FieldTypeRef::entity(target)))
}
