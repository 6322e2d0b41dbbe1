use crate::{
    error::ConvertError,
    model::{Attribute, GenericEntity, Link, TableInfo},
};

///
/// AttributeSlot
///
/// Position in an entity's attribute list. A pending slot holds the place of
/// a foreign key until its referenced entity's key is resolved.
///

#[derive(Debug)]
enum AttributeSlot {
    Resolved(Attribute),
    Pending(String),
}

impl AttributeSlot {
    const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    fn name(&self) -> &str {
        match self {
            Self::Resolved(attr) => &attr.name,
            Self::Pending(name) => name,
        }
    }
}

///
/// EntityBuilder
///
/// Output entity under construction for one resolution run.
///

#[derive(Debug)]
pub(crate) struct EntityBuilder {
    class_name: String,
    database: TableInfo,
    slots: Vec<AttributeSlot>,
    links: Vec<Link>,
}

impl EntityBuilder {
    pub(crate) fn new(name: &str, table_type: &str) -> Self {
        Self {
            class_name: name.to_string(),
            database: TableInfo::new(table_type),
            slots: Vec::new(),
            links: Vec::new(),
        }
    }

    pub(crate) fn push_attribute(&mut self, attr: Attribute) {
        self.slots.push(AttributeSlot::Resolved(attr));
    }

    pub(crate) fn push_placeholder(&mut self, name: &str) {
        self.slots.push(AttributeSlot::Pending(name.to_string()));
    }

    pub(crate) fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Replace the pending slot named like `attr`, keeping its position.
    pub(crate) fn resolve_placeholder(&mut self, attr: Attribute) -> Result<(), ConvertError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_pending() && slot.name() == attr.name)
            .ok_or_else(|| ConvertError::PlaceholderNotFound {
                entity: self.class_name.clone(),
                field: attr.name.clone(),
            })?;
        *slot = AttributeSlot::Resolved(attr);

        Ok(())
    }

    pub(crate) fn build(self) -> Result<GenericEntity, ConvertError> {
        let mut attributes = Vec::with_capacity(self.slots.len());
        for slot in self.slots {
            match slot {
                AttributeSlot::Resolved(attr) => attributes.push(attr),
                AttributeSlot::Pending(field) => {
                    return Err(ConvertError::UnresolvedPlaceholder {
                        entity: self.class_name,
                        field,
                    });
                }
            }
        }

        Ok(GenericEntity {
            table_name: self.class_name.clone(),
            class_name: self.class_name,
            database: self.database,
            attributes,
            links: self.links,
        })
    }

    #[cfg(test)]
    pub(crate) fn slot_names(&self) -> Vec<&str> {
        self.slots.iter().map(AttributeSlot::name).collect()
    }
}

///
/// TESTS
///
