//! ## Crate layout
//! - `primitives`: the neutral type registry.
//! - `schema`: annotation keywords and parser, the declared input model, and
//!   pre-resolution validation.
//! - `core`: the resolved relational model and the four-phase resolver.
//! - `config`: `entdsl.toml` loading.
//! - `error`: one public error type over every layer.
//!
//! Typical use: parse each field's annotation text with [`parser`], assemble
//! a `Model`, then call [`resolve`].

pub use entdsl_config_build as config;
pub use entdsl_core as core;
pub use entdsl_primitives as primitives;
pub use entdsl_schema as schema;

pub mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

use entdsl_config_build::Config;
use entdsl_core::{Converter, GenericModel};
use entdsl_schema::{node::Model, parse::AnnotationParser};
use tracing::debug;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Annotation parser honouring the configured policies.
#[must_use]
pub const fn parser(config: &Config) -> AnnotationParser {
    AnnotationParser::new(&config.annotations)
}

/// Validate and resolve a declared model.
pub fn resolve(model: &Model, config: &Config) -> Result<GenericModel, Error> {
    let resolved = Converter::new(config.convert()).convert(model)?;
    debug!(
        entities = resolved.entities().len(),
        model = %resolved.name,
        "model resolved"
    );

    Ok(resolved)
}

/// Resolve with the default configuration.
pub fn resolve_default(model: &Model) -> Result<GenericModel, Error> {
    resolve(model, &Config::default())
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error, ErrorKind, ErrorOrigin,
        config::Config,
        core::{Attribute, Cardinality, GenericEntity, GenericModel, Link},
        parser, resolve, resolve_default,
    };
    pub use entdsl_schema::prelude::*;
}
