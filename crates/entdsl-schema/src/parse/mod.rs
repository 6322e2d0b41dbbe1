//! Annotation block parsing.

mod annotation;

pub use annotation::AnnotationParser;
