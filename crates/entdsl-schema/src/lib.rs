pub mod error;
pub mod keyword;
pub mod node;
pub mod parse;
pub mod validate;

/// Cardinality of a single-valued entity reference.
pub const CARDINALITY_ONE: i32 = 1;

/// Conventional cardinality of a collection reference.
pub const CARDINALITY_MANY: i32 = -1;

pub use error::{ErrorClass, SchemaError, SyntaxErrorKind};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        CARDINALITY_MANY, CARDINALITY_ONE,
        error::{ErrorClass, SchemaError, SyntaxErrorKind},
        keyword::{AnnotationName, KeywordSpec, ParameterKind},
        node::*,
        parse::AnnotationParser,
    };
    pub use entdsl_primitives::NeutralType;
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
