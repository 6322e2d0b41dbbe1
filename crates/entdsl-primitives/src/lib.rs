//! Neutral type registry.
//!
//! Neutral types are the fixed set of primitive domain types a field may be
//! declared with, independent of any target platform's native types. The set
//! is closed: it is defined once by the registry macro and never changes at
//! runtime.

#[macro_use]
mod macros;

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// UnknownTypeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid neutral type name '{0}'")]
pub struct UnknownTypeError(pub String);

///
/// NeutralType
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NeutralType {
    String,
    Integer,
    Decimal,
    Boolean,
    Date,
    Time,
    Timestamp,
    Blob,
    Clob,
}

impl NeutralType {
    /// Every neutral type, in registry order.
    pub const ALL: [Self; 9] = neutral_type_registry!(all_types_from_registry);

    /// Keyword used for this type in entity declarations.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        neutral_type_registry!(name_from_registry, self)
    }

    #[must_use]
    pub const fn family(self) -> NeutralTypeFamily {
        neutral_type_registry!(family_from_registry, self)
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self.family(), NeutralTypeFamily::Numeric)
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self.family(), NeutralTypeFamily::Temporal)
    }

    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self.family(), NeutralTypeFamily::Textual)
    }

    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self.family(), NeutralTypeFamily::Binary)
    }

    /// Exact, case-sensitive lookup by keyword.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        neutral_type_registry!(lookup_from_registry, name)
    }

    #[must_use]
    pub fn exists(name: &str) -> bool {
        Self::lookup(name).is_some()
    }

    pub fn get_type(name: &str) -> Result<Self, UnknownTypeError> {
        Self::lookup(name).ok_or_else(|| UnknownTypeError(name.to_string()))
    }

    /// Set of all neutral type keywords.
    #[must_use]
    pub fn names() -> BTreeSet<&'static str> {
        Self::ALL.iter().map(|ty| ty.as_str()).collect()
    }

    #[must_use]
    pub fn sorted_names() -> Vec<&'static str> {
        Self::names().into_iter().collect()
    }
}

impl fmt::Display for NeutralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NeutralType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::get_type(s)
    }
}

///
/// NeutralTypeFamily
///
/// Coarse grouping used by generators to pick a representation.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NeutralTypeFamily {
    Binary,
    Bool,
    Numeric,
    Temporal,
    Textual,
}

///
/// TESTS
///
