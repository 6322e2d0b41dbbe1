//! Annotation keyword table.
//!
//! The table is the single source of truth for which annotation names exist
//! and which parameter each one takes. The parser validates against it and the
//! resolver interprets the same `AnnotationName` values.

use crate::prelude::*;
use derive_more::Display;

/// Sigil that opens every annotation.
pub const ANNOTATION_SIGIL: char = '@';

///
/// AnnotationName
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum AnnotationName {
    AutoIncremented,
    Embedded,
    Future,
    Id,
    LongText,
    Max,
    Min,
    NotBlank,
    NotEmpty,
    NotNull,
    ObjectType,
    Past,
    PrimitiveType,
    SizeMax,
    SizeMin,
    SqlType,
    UnsignedType,
}

///
/// ParameterKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParameterKind {
    None,
    Decimal,
    Integer,
}

impl ParameterKind {
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::None)
    }
}

///
/// KeywordSpec
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeywordSpec {
    pub name: AnnotationName,
    pub keyword: &'static str,
    pub parameter: ParameterKind,
}

impl KeywordSpec {
    const fn new(name: AnnotationName, keyword: &'static str, parameter: ParameterKind) -> Self {
        Self {
            name,
            keyword,
            parameter,
        }
    }
}

const KEYWORDS: [KeywordSpec; 17] = [
    KeywordSpec::new(AnnotationName::Id, "Id", ParameterKind::None),
    KeywordSpec::new(
        AnnotationName::AutoIncremented,
        "AutoIncremented",
        ParameterKind::None,
    ),
    KeywordSpec::new(AnnotationName::NotNull, "NotNull", ParameterKind::None),
    KeywordSpec::new(AnnotationName::NotEmpty, "NotEmpty", ParameterKind::None),
    KeywordSpec::new(AnnotationName::NotBlank, "NotBlank", ParameterKind::None),
    KeywordSpec::new(AnnotationName::Min, "Min", ParameterKind::Decimal),
    KeywordSpec::new(AnnotationName::Max, "Max", ParameterKind::Decimal),
    KeywordSpec::new(AnnotationName::SizeMin, "SizeMin", ParameterKind::Integer),
    KeywordSpec::new(AnnotationName::SizeMax, "SizeMax", ParameterKind::Integer),
    KeywordSpec::new(AnnotationName::Past, "Past", ParameterKind::None),
    KeywordSpec::new(AnnotationName::Future, "Future", ParameterKind::None),
    KeywordSpec::new(
        AnnotationName::PrimitiveType,
        "PrimitiveType",
        ParameterKind::None,
    ),
    KeywordSpec::new(
        AnnotationName::UnsignedType,
        "UnsignedType",
        ParameterKind::None,
    ),
    KeywordSpec::new(AnnotationName::ObjectType, "ObjectType", ParameterKind::None),
    KeywordSpec::new(AnnotationName::SqlType, "SqlType", ParameterKind::None),
    KeywordSpec::new(AnnotationName::LongText, "LongText", ParameterKind::None),
    KeywordSpec::new(AnnotationName::Embedded, "Embedded", ParameterKind::None),
];

/// Canonical, ordered list of annotation keywords.
#[must_use]
pub const fn annotations() -> &'static [KeywordSpec] {
    &KEYWORDS
}

/// Exact, case-sensitive keyword lookup.
#[must_use]
pub fn lookup(keyword: &str) -> Option<&'static KeywordSpec> {
    KEYWORDS.iter().find(|spec| spec.keyword == keyword)
}

/// Table entry for an annotation name.
#[must_use]
pub fn spec_for(name: AnnotationName) -> Option<&'static KeywordSpec> {
    KEYWORDS.iter().find(|spec| spec.name == name)
}

/// Neutral type keywords, exposed for consumers recognising types in the wider grammar.
#[must_use]
pub fn neutral_types() -> std::collections::BTreeSet<&'static str> {
    NeutralType::names()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn keyword_text_matches_annotation_name() {
        for spec in annotations() {
            assert_eq!(spec.keyword, spec.name.to_string());
        }
    }

    #[test]
    fn every_annotation_name_appears_exactly_once() {
        let names: BTreeSet<_> = annotations().iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), annotations().len());

        for spec in annotations() {
            assert_eq!(spec_for(spec.name), Some(spec));
        }
    }

    fn kind(name: AnnotationName) -> Option<ParameterKind> {
        spec_for(name).map(|spec| spec.parameter)
    }

    #[test]
    fn parameter_kinds_follow_the_table() {
        assert_eq!(kind(AnnotationName::Min), Some(ParameterKind::Decimal));
        assert_eq!(kind(AnnotationName::Max), Some(ParameterKind::Decimal));
        assert_eq!(kind(AnnotationName::SizeMin), Some(ParameterKind::Integer));
        assert_eq!(kind(AnnotationName::SizeMax), Some(ParameterKind::Integer));
        assert_eq!(kind(AnnotationName::Id), Some(ParameterKind::None));
        assert!(!ParameterKind::None.is_required());
        assert!(ParameterKind::Integer.is_required());
    }

    #[test]
    fn lookup_is_exact() {
        assert!(lookup("Id").is_some());
        assert!(lookup("id").is_none());
        assert!(lookup("Size").is_none());
        assert!(lookup("NotNullable").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn table_order_starts_with_key_annotations() {
        let first: Vec<_> = annotations().iter().take(2).map(|s| s.keyword).collect();
        assert_eq!(first, ["Id", "AutoIncremented"]);
    }

    #[test]
    fn neutral_type_keywords_are_exposed() {
        assert!(neutral_types().contains("timestamp"));
    }
}
