use entdsl_primitives::NeutralType;
use rust_decimal::Decimal;
use serde::Serialize;
use std::ops::Not;

///
/// Attribute
///
/// One column-like member of a resolved entity. Either a plain neutral-typed
/// field or a foreign key inferred from a single-valued entity reference.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub neutral_type: NeutralType,

    #[serde(skip_serializing_if = "Not::not")]
    pub key: bool,

    #[serde(skip_serializing_if = "Not::not")]
    pub auto_incremented: bool,

    pub constraints: AttributeConstraints,
    pub type_hints: TypeHints,

    #[serde(skip_serializing_if = "Not::not")]
    pub fk_simple: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referenced_entity: Option<String>,

    pub database: ColumnInfo,
    pub label: String,
    pub selected: bool,

    pub reserved: AttributeReserved,
}

impl Attribute {
    /// Attribute with the default metadata every resolved field carries.
    #[must_use]
    pub fn new(name: impl Into<String>, neutral_type: NeutralType) -> Self {
        let name = name.into();

        Self {
            database: ColumnInfo::named(&name),
            label: name.clone(),
            name,
            neutral_type,
            key: false,
            auto_incremented: false,
            constraints: AttributeConstraints::default(),
            type_hints: TypeHints::default(),
            fk_simple: false,
            referenced_entity: None,
            selected: true,
            reserved: AttributeReserved::default(),
        }
    }

    #[must_use]
    pub const fn is_fk_simple(&self) -> bool {
        self.fk_simple
    }

    #[must_use]
    pub const fn is_not_null(&self) -> bool {
        self.constraints.not_null
    }
}

///
/// AttributeConstraints
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct AttributeConstraints {
    pub not_null: bool,
    pub not_empty: bool,
    pub not_blank: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,

    pub date_past: bool,
    pub date_future: bool,
    pub long_text: bool,
}

///
/// TypeHints
///
/// Representation the generator is asked to prefer. Not validated here.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct TypeHints {
    pub primitive_type_expected: bool,
    pub unsigned_type_expected: bool,
    pub object_type_expected: bool,
    pub sql_type_expected: bool,
}

///
/// ColumnInfo
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub comment: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,

    pub not_null: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ColumnInfo {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

///
/// AttributeReserved
///
/// Metadata the generator may read in the future. Never populated by the
/// resolver; always the neutral default.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AttributeReserved {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
}
