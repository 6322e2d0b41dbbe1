//! Resolved relational model.
//!
//! This is what code generators consume: entities with ordered attributes
//! (foreign keys already inferred) and the links between them. Values here
//! are built by `convert` and not mutated afterwards.

mod attribute;
mod entity;
mod link;

pub use attribute::*;
pub use entity::*;
pub use link::*;
