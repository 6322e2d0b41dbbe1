use crate::model::Attribute;
use entdsl_schema::prelude::*;

///
/// Population
///
/// Which annotation rules apply to the attribute being built.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Population {
    /// Attribute built from its own field declaration.
    Field,

    /// Foreign key mirroring the referenced entity's key field. Only
    /// constraints and type hints carry over; key, auto-increment and
    /// database flags stay with the key field itself.
    KeyMirror,
}

// populate
// applies each annotation once, in map order
#[remain::check]
pub(crate) fn populate(attr: &mut Attribute, annotations: &AnnotationMap, population: Population) {
    let own_field = population == Population::Field;

    for record in annotations.iter() {
        #[sorted]
        match record.name {
            AnnotationName::AutoIncremented => {
                if own_field {
                    attr.auto_incremented = true;
                }
            }
            AnnotationName::Embedded => {}
            AnnotationName::Future => attr.constraints.date_future = true,
            AnnotationName::Id => {
                if own_field {
                    attr.key = true;
                    attr.constraints.not_null = true;
                    attr.database.not_null = true;
                }
            }
            AnnotationName::LongText => attr.constraints.long_text = true,
            AnnotationName::Max => attr.constraints.max_value = record.decimal_param(),
            AnnotationName::Min => attr.constraints.min_value = record.decimal_param(),
            AnnotationName::NotBlank => attr.constraints.not_blank = true,
            AnnotationName::NotEmpty => attr.constraints.not_empty = true,
            AnnotationName::NotNull => {
                attr.constraints.not_null = true;
                if own_field {
                    attr.database.not_null = true;
                }
            }
            AnnotationName::ObjectType => attr.type_hints.object_type_expected = true,
            AnnotationName::Past => attr.constraints.date_past = true,
            AnnotationName::PrimitiveType => attr.type_hints.primitive_type_expected = true,
            AnnotationName::SizeMax => {
                attr.constraints.max_length = record.integer_param();
                if own_field {
                    attr.database.size = record.integer_param();
                }
            }
            AnnotationName::SizeMin => attr.constraints.min_length = record.integer_param(),
            AnnotationName::SqlType => attr.type_hints.sql_type_expected = true,
            AnnotationName::UnsignedType => attr.type_hints.unsigned_type_expected = true,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn build(records: &[AnnotationRecord], population: Population) -> Attribute {
        let mut attr = Attribute::new("f", NeutralType::Integer);
        let annotations: AnnotationMap = records.iter().copied().collect();
        populate(&mut attr, &annotations, population);

        attr
    }

    #[test]
    fn id_implies_not_null_at_both_levels() {
        let attr = build(&[AnnotationRecord::flag(AnnotationName::Id)], Population::Field);

        assert!(attr.key);
        assert!(attr.constraints.not_null);
        assert!(attr.database.not_null);
    }

    #[test]
    fn size_max_sets_length_and_column_size() {
        let attr = build(
            &[AnnotationRecord::integer(AnnotationName::SizeMax, 20)],
            Population::Field,
        );

        assert_eq!(attr.constraints.max_length, Some(20));
        assert_eq!(attr.database.size, Some(20));
    }

    #[test]
    fn min_and_max_are_decimals() {
        let attr = build(
            &[
                AnnotationRecord::decimal(AnnotationName::Min, Decimal::ONE),
                AnnotationRecord::decimal(AnnotationName::Max, Decimal::from(25)),
            ],
            Population::Field,
        );

        assert_eq!(attr.constraints.min_value, Some(Decimal::ONE));
        assert_eq!(attr.constraints.max_value, Some(Decimal::from(25)));
    }

    #[test]
    fn flags_and_type_hints() {
        let attr = build(
            &[
                AnnotationRecord::flag(AnnotationName::AutoIncremented),
                AnnotationRecord::flag(AnnotationName::NotEmpty),
                AnnotationRecord::flag(AnnotationName::NotBlank),
                AnnotationRecord::flag(AnnotationName::Past),
                AnnotationRecord::flag(AnnotationName::Future),
                AnnotationRecord::flag(AnnotationName::LongText),
                AnnotationRecord::flag(AnnotationName::PrimitiveType),
                AnnotationRecord::flag(AnnotationName::UnsignedType),
                AnnotationRecord::flag(AnnotationName::ObjectType),
                AnnotationRecord::flag(AnnotationName::SqlType),
            ],
            Population::Field,
        );

        assert!(attr.auto_incremented);
        assert!(attr.constraints.not_empty && attr.constraints.not_blank);
        assert!(attr.constraints.date_past && attr.constraints.date_future);
        assert!(attr.constraints.long_text);
        assert_eq!(
            attr.type_hints,
            crate::model::TypeHints {
                primitive_type_expected: true,
                unsigned_type_expected: true,
                object_type_expected: true,
                sql_type_expected: true,
            }
        );
    }

    #[test]
    fn not_null_sets_column_flag_only_for_own_field() {
        let own = build(&[AnnotationRecord::flag(AnnotationName::NotNull)], Population::Field);
        assert!(own.constraints.not_null && own.database.not_null);

        let mirrored = build(
            &[AnnotationRecord::flag(AnnotationName::NotNull)],
            Population::KeyMirror,
        );
        assert!(mirrored.constraints.not_null);
        assert!(!mirrored.database.not_null);
    }

    #[test]
    fn key_mirror_keeps_constraints_but_not_key_flags() {
        let attr = build(
            &[
                AnnotationRecord::flag(AnnotationName::Id),
                AnnotationRecord::flag(AnnotationName::AutoIncremented),
                AnnotationRecord::integer(AnnotationName::SizeMax, 20),
            ],
            Population::KeyMirror,
        );

        assert!(!attr.key);
        assert!(!attr.auto_incremented);
        assert_eq!(attr.constraints.max_length, Some(20));
        assert_eq!(attr.database.size, None);
    }

    #[test]
    fn no_annotations_leave_defaults() {
        let attr = build(&[], Population::Field);
        assert_eq!(attr, Attribute::new("f", NeutralType::Integer));
    }
}
