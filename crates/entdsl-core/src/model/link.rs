use derive_more::Display;
use serde::Serialize;
use std::ops::Not;

///
/// Cardinality
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Cardinality {
    ManyToOne,
    OneToMany,
}

///
/// Link
///
/// Relationship from the entity that declares the reference field to its
/// target entity.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Link {
    pub id: String,
    pub field_name: String,
    pub field_type: String,
    pub target_entity: String,
    pub target_table: String,
    pub cardinality: Cardinality,
    pub owning_side: bool,
    pub inverse_side: bool,

    #[serde(skip_serializing_if = "Not::not")]
    pub embedded: bool,

    pub reserved: LinkReserved,
}

impl Link {
    #[must_use]
    pub const fn is_many_to_one(&self) -> bool {
        matches!(self.cardinality, Cardinality::ManyToOne)
    }

    #[must_use]
    pub const fn is_one_to_many(&self) -> bool {
        matches!(self.cardinality, Cardinality::OneToMany)
    }
}

///
/// LinkReserved
///
/// Mapping details a generator may read in the future. Never populated by
/// the resolver; always the neutral default.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct LinkReserved {
    pub fetch_type: FetchType,
    pub optional: Optionality,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_table_name: Option<String>,
}

///
/// FetchType
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum FetchType {
    #[default]
    Default,
    Eager,
    Lazy,
}

///
/// Optionality
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum Optionality {
    #[default]
    Undefined,
    Optional,
    Required,
}
