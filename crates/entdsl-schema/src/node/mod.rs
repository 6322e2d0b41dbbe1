mod annotation;
mod entity;
mod field;
mod model;

pub use annotation::*;
pub use entity::*;
pub use field::*;
pub use model::*;
