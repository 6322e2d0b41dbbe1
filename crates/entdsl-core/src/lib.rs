//! Resolved relational model and the resolver that builds it.
//!
//! - `model` defines the output graph handed to code generators
//! - `convert` turns a declared `entdsl_schema` model into that graph

pub mod convert;
pub mod error;
pub mod model;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use convert::{Converter, convert};
pub use error::ConvertError;
pub use model::{Attribute, Cardinality, GenericEntity, GenericModel, Link};
