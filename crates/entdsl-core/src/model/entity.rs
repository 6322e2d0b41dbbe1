use crate::model::{Attribute, Link};
use serde::Serialize;

///
/// TableInfo
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableInfo {
    pub catalog: String,
    pub schema: String,
    pub table_type: String,

    /// Foreign key constraints declared on the table. Inferred foreign keys
    /// live on attributes, so the resolver leaves this empty.
    pub foreign_keys: Vec<String>,
}

impl TableInfo {
    #[must_use]
    pub fn new(table_type: impl Into<String>) -> Self {
        Self {
            catalog: String::new(),
            schema: String::new(),
            table_type: table_type.into(),
            foreign_keys: Vec::new(),
        }
    }
}

///
/// GenericEntity
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GenericEntity {
    pub class_name: String,
    pub table_name: String,
    pub database: TableInfo,
    pub attributes: Vec<Attribute>,
    pub links: Vec<Link>,
}

impl GenericEntity {
    #[must_use]
    pub fn attribute_by_name(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn key_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|a| a.key)
    }

    pub fn links_to<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a Link> {
        self.links.iter().filter(move |l| l.target_entity == target)
    }
}

///
/// GenericModel
///
/// Resolved model. Entities are kept sorted by class name, independent of
/// declaration order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct GenericModel {
    pub name: String,
    pub description: String,
    entities: Vec<GenericEntity>,
}

impl GenericModel {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        mut entities: Vec<GenericEntity>,
    ) -> Self {
        entities.sort_by(|a, b| a.class_name.cmp(&b.class_name));

        Self {
            name: name.into(),
            description: description.into(),
            entities,
        }
    }

    #[must_use]
    pub fn entities(&self) -> &[GenericEntity] {
        &self.entities
    }

    #[must_use]
    pub fn entity_by_class_name(&self, name: &str) -> Option<&GenericEntity> {
        self.entities
            .binary_search_by(|e| e.class_name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.entities[idx])
    }

    #[must_use]
    pub fn entity_by_table_name(&self, name: &str) -> Option<&GenericEntity> {
        self.entities.iter().find(|e| e.table_name == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

///
/// TESTS
///
