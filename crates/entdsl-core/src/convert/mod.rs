//! Model resolution.
//!
//! A run turns a declared `Model` into a `GenericModel` in four phases over a
//! name-keyed arena of output entities. Every phase finishes for all entities
//! before the next starts, so references may point forward or form cycles.
//!
//! 1. shells: one empty output entity per declared entity
//! 2. attributes: neutral fields become attributes; single-valued references
//!    reserve a placeholder slot at their declared position
//! 3. links: every entity reference becomes a link on its declaring entity
//! 4. foreign keys: placeholders are replaced by attributes mirroring the
//!    referenced entity's key field

mod builder;
mod populate;

use crate::{
    error::ConvertError,
    model::{Attribute, Cardinality, GenericEntity, GenericModel, Link, LinkReserved},
};
use builder::EntityBuilder;
use entdsl_config_build::ConvertConfig;
use entdsl_schema::{prelude::*, validate::validate_model};
use populate::{Population, populate};
use std::collections::BTreeMap;
use tracing::{debug, debug_span, trace};

///
/// Converter
///
/// Holds resolver settings. Runs share no state, so one converter can be
/// reused for any number of models.
///

#[derive(Clone, Debug, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    #[must_use]
    pub const fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, model: &Model) -> Result<GenericModel, ConvertError> {
        let name = model.name.clone().unwrap_or_default();
        let span = debug_span!("convert", model = %name);
        let _enter = span.enter();

        validate_model(model)?;

        let mut run = Run::new(&self.config, model);
        run.create_shells();
        run.convert_attributes()?;
        run.create_links()?;
        run.resolve_foreign_keys()?;
        let entities = run.finish()?;

        Ok(GenericModel::new(
            name,
            model.description.clone().unwrap_or_default(),
            entities,
        ))
    }
}

/// Resolve a model with the default settings.
pub fn convert(model: &Model) -> Result<GenericModel, ConvertError> {
    Converter::default().convert(model)
}

///
/// Run
/// State of a single resolution. The link counter lives here and nowhere else.
///

struct Run<'a> {
    config: &'a ConvertConfig,
    model: &'a Model,
    declared: BTreeMap<&'a str, &'a Entity>,
    arena: BTreeMap<&'a str, EntityBuilder>,
    link_count: usize,
}

impl<'a> Run<'a> {
    fn new(config: &'a ConvertConfig, model: &'a Model) -> Self {
        let declared = model
            .entities
            .iter()
            .map(|entity| (entity.name.as_str(), entity))
            .collect();

        Self {
            config,
            model,
            declared,
            arena: BTreeMap::new(),
            link_count: 0,
        }
    }

    // phase 1
    fn create_shells(&mut self) {
        let model = self.model;

        for entity in &model.entities {
            self.arena.insert(
                entity.name.as_str(),
                EntityBuilder::new(&entity.name, &self.config.entity.table_type),
            );
        }

        debug!(entities = self.arena.len(), "entity shells created");
    }

    // phase 2
    fn convert_attributes(&mut self) -> Result<(), ConvertError> {
        let model = self.model;

        for entity in &model.entities {
            let builder = self.builder_mut(&entity.name)?;

            for field in &entity.fields {
                match &field.ty {
                    FieldTypeRef::Neutral(ty) => {
                        let mut attr = Attribute::new(&field.name, *ty);
                        populate(&mut attr, &field.annotations, Population::Field);
                        trace!(entity = %entity.name, field = %field.name, ty = %ty, "attribute");
                        builder.push_attribute(attr);
                    }
                    FieldTypeRef::EntityReference(target) if field.is_single_valued() => {
                        trace!(entity = %entity.name, field = %field.name, target = %target, "foreign key placeholder");
                        builder.push_placeholder(&field.name);
                    }
                    FieldTypeRef::EntityReference(_) => {}
                }
            }
        }

        debug!("attributes converted");

        Ok(())
    }

    // phase 3
    fn create_links(&mut self) -> Result<(), ConvertError> {
        let model = self.model;
        let mut created = 0usize;

        for entity in &model.entities {
            for field in &entity.fields {
                let Some(target) = field.referenced_entity() else {
                    continue;
                };
                if !self.arena.contains_key(target) {
                    return Err(ConvertError::NoTargetEntity {
                        entity: entity.name.clone(),
                        field: field.name.clone(),
                        target: target.to_string(),
                    });
                }

                let link = self.build_link(field, target);
                trace!(entity = %entity.name, link = %link.id, cardinality = %link.cardinality, target = %target, "link");
                self.builder_mut(&entity.name)?.push_link(link);
                created += 1;
            }
        }

        debug!(links = created, "links created");

        Ok(())
    }

    fn build_link(&mut self, field: &Field, target: &str) -> Link {
        self.link_count += 1;

        let (cardinality, field_type) = if field.is_single_valued() {
            (Cardinality::ManyToOne, target.to_string())
        } else {
            (
                Cardinality::OneToMany,
                format!("{}<{target}>", self.config.link.collection_type),
            )
        };
        let owning_side = cardinality == Cardinality::ManyToOne;

        Link {
            id: format!("{}{}", self.config.link.id_prefix, self.link_count),
            field_name: field.name.clone(),
            field_type,
            target_entity: target.to_string(),
            target_table: target.to_string(),
            cardinality,
            owning_side,
            inverse_side: !owning_side,
            embedded: field.has_annotation(AnnotationName::Embedded),
            reserved: LinkReserved::default(),
        }
    }

    // phase 4
    fn resolve_foreign_keys(&mut self) -> Result<(), ConvertError> {
        let model = self.model;
        let mut resolved = 0usize;

        for entity in &model.entities {
            for field in entity.fields.iter().filter(|f| f.is_pseudo_foreign_key()) {
                let Some(target) = field.referenced_entity() else {
                    continue;
                };
                let attr = self.foreign_key_attribute(entity, field, target)?;
                trace!(entity = %entity.name, field = %field.name, target = %target, ty = %attr.neutral_type, "foreign key");
                self.builder_mut(&entity.name)?.resolve_placeholder(attr)?;
                resolved += 1;
            }
        }

        debug!(foreign_keys = resolved, "foreign keys resolved");

        Ok(())
    }

    fn foreign_key_attribute(
        &self,
        entity: &Entity,
        field: &Field,
        target: &str,
    ) -> Result<Attribute, ConvertError> {
        let referenced =
            self.declared
                .get(target)
                .ok_or_else(|| ConvertError::NoTargetEntity {
                    entity: entity.name.clone(),
                    field: field.name.clone(),
                    target: target.to_string(),
                })?;
        let key = key_field(referenced)?;

        let FieldTypeRef::Neutral(ty) = &key.ty else {
            return Err(ConvertError::KeyNotNeutral {
                entity: referenced.name.clone(),
                field: key.name.clone(),
            });
        };

        let mut attr = Attribute::new(&field.name, *ty);
        populate(&mut attr, &key.annotations, Population::KeyMirror);
        attr.fk_simple = true;
        attr.referenced_entity = Some(referenced.name.clone());

        Ok(attr)
    }

    fn builder_mut(&mut self, name: &str) -> Result<&mut EntityBuilder, ConvertError> {
        self.arena
            .get_mut(name)
            .ok_or_else(|| ConvertError::UnknownEntity {
                entity: name.to_string(),
            })
    }

    fn finish(self) -> Result<Vec<GenericEntity>, ConvertError> {
        self.arena.into_values().map(EntityBuilder::build).collect()
    }
}

// key_field
// the single @Id field of a referenced entity
fn key_field(entity: &Entity) -> Result<&Field, ConvertError> {
    if entity.fields.is_empty() {
        return Err(ConvertError::EntityHasNoFields {
            entity: entity.name.clone(),
        });
    }

    let mut keys = entity.key_fields();
    match (keys.next(), keys.next()) {
        (Some(key), None) => Ok(key),
        (None, _) => Err(ConvertError::NoPrimaryKey {
            entity: entity.name.clone(),
        }),
        (Some(_), Some(_)) => Err(ConvertError::MultiplePrimaryKeys {
            entity: entity.name.clone(),
            count: entity.key_fields().count(),
        }),
    }
}

///
/// TESTS
///
