use crate::prelude::*;

///
/// AnnotationParam
///
/// Parameter of an annotation, typed by the keyword that accepted it.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AnnotationParam {
    Decimal(Decimal),
    Integer(i32),
}

///
/// AnnotationRecord
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AnnotationRecord {
    pub name: AnnotationName,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<AnnotationParam>,
}

impl AnnotationRecord {
    #[must_use]
    pub const fn flag(name: AnnotationName) -> Self {
        Self {
            name,
            parameter: None,
        }
    }

    #[must_use]
    pub const fn decimal(name: AnnotationName, value: Decimal) -> Self {
        Self {
            name,
            parameter: Some(AnnotationParam::Decimal(value)),
        }
    }

    #[must_use]
    pub const fn integer(name: AnnotationName, value: i32) -> Self {
        Self {
            name,
            parameter: Some(AnnotationParam::Integer(value)),
        }
    }

    #[must_use]
    pub const fn decimal_param(&self) -> Option<Decimal> {
        match self.parameter {
            Some(AnnotationParam::Decimal(value)) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn integer_param(&self) -> Option<i32> {
        match self.parameter {
            Some(AnnotationParam::Integer(value)) => Some(value),
            _ => None,
        }
    }
}

///
/// AnnotationMap
///
/// Name-keyed annotations of one field. Inserting a name that is already
/// present replaces the earlier record but keeps its position.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnnotationMap(Vec<AnnotationRecord>);

impl AnnotationMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a record, returning the one it replaced.
    pub fn insert(&mut self, record: AnnotationRecord) -> Option<AnnotationRecord> {
        match self.0.iter_mut().find(|r| r.name == record.name) {
            Some(slot) => Some(std::mem::replace(slot, record)),
            None => {
                self.0.push(record);
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: AnnotationName) -> Option<&AnnotationRecord> {
        self.0.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: AnnotationName) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnotationRecord> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = AnnotationName> + '_ {
        self.0.iter().map(|r| r.name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<AnnotationRecord> for AnnotationMap {
    fn extend<I: IntoIterator<Item = AnnotationRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<AnnotationRecord> for AnnotationMap {
    fn from_iter<I: IntoIterator<Item = AnnotationRecord>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_occurrence_wins_in_first_position() {
        let map: AnnotationMap = [
            AnnotationRecord::integer(AnnotationName::SizeMax, 10),
            AnnotationRecord::flag(AnnotationName::NotNull),
            AnnotationRecord::integer(AnnotationName::SizeMax, 20),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.names().collect::<Vec<_>>(),
            [AnnotationName::SizeMax, AnnotationName::NotNull]
        );
        assert_eq!(
            map.get(AnnotationName::SizeMax)
                .and_then(AnnotationRecord::integer_param),
            Some(20)
        );
    }

    #[test]
    fn typed_parameter_accessors() {
        let min = AnnotationRecord::decimal(AnnotationName::Min, Decimal::new(15, 1));
        assert_eq!(min.decimal_param(), Some(Decimal::new(15, 1)));
        assert_eq!(min.integer_param(), None);

        let flag = AnnotationRecord::flag(AnnotationName::Id);
        assert_eq!(flag.parameter, None);
        assert!(AnnotationMap::new().is_empty());
    }
}
