use crate::prelude::*;

///
/// FieldTypeRef
///
/// Declared type of a field: either a neutral type or a reference to another
/// entity by name.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum FieldTypeRef {
    Neutral(NeutralType),
    EntityReference(String),
}

impl FieldTypeRef {
    /// Classify a declared type name. Names outside the neutral registry are
    /// taken as entity references; dangling ones surface during resolution.
    #[must_use]
    pub fn from_type_name(type_name: &str) -> Self {
        NeutralType::lookup(type_name).map_or_else(
            || Self::EntityReference(type_name.to_string()),
            Self::Neutral,
        )
    }

    #[must_use]
    pub fn entity(name: impl Into<String>) -> Self {
        Self::EntityReference(name.into())
    }

    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral(_))
    }

    #[must_use]
    pub const fn is_entity(&self) -> bool {
        matches!(self, Self::EntityReference(_))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Neutral(ty) => ty.as_str(),
            Self::EntityReference(name) => name,
        }
    }
}

impl From<NeutralType> for FieldTypeRef {
    fn from(ty: NeutralType) -> Self {
        Self::Neutral(ty)
    }
}

///
/// Field
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: FieldTypeRef,
    pub cardinality: i32,

    #[serde(default, skip_serializing_if = "AnnotationMap::is_empty")]
    pub annotations: AnnotationMap,
}

impl Field {
    /// Single-valued field without annotations.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<FieldTypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            cardinality: CARDINALITY_ONE,
            annotations: AnnotationMap::new(),
        }
    }

    /// Assemble a field from the tokenizer's per-field output.
    pub fn from_declaration(
        name: &str,
        type_name: &str,
        cardinality: i32,
        annotation_text: &str,
        parser: &AnnotationParser,
    ) -> Result<Self, SchemaError> {
        let annotations = parser.parse(annotation_text)?.into_iter().collect();

        Ok(Self {
            name: name.to_string(),
            ty: FieldTypeRef::from_type_name(type_name),
            cardinality,
            annotations,
        })
    }

    #[must_use]
    pub const fn with_cardinality(mut self, cardinality: i32) -> Self {
        self.cardinality = cardinality;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, record: AnnotationRecord) -> Self {
        self.annotations.insert(record);
        self
    }

    #[must_use]
    pub fn has_annotation(&self, name: AnnotationName) -> bool {
        self.annotations.contains(name)
    }

    /// Field carries the primary key annotation.
    #[must_use]
    pub fn is_key(&self) -> bool {
        self.has_annotation(AnnotationName::Id)
    }

    #[must_use]
    pub const fn is_single_valued(&self) -> bool {
        self.cardinality == CARDINALITY_ONE
    }

    /// Single-valued entity reference, resolved into a foreign key attribute.
    #[must_use]
    pub const fn is_pseudo_foreign_key(&self) -> bool {
        self.ty.is_entity() && self.is_single_valued()
    }

    /// Multi-valued entity reference, producing a link only.
    #[must_use]
    pub const fn is_collection_reference(&self) -> bool {
        self.ty.is_entity() && !self.is_single_valued()
    }

    #[must_use]
    pub fn referenced_entity(&self) -> Option<&str> {
        match &self.ty {
            FieldTypeRef::EntityReference(name) => Some(name),
            FieldTypeRef::Neutral(_) => None,
        }
    }
}

///
/// TESTS
///
