//! Core types: style configuration and the reference syntax

mod reference;
mod style;

pub use reference::{ParsedReference, ReferenceKind};
pub use style::{
    DEFAULT_DOCUMENT_CLASS, StyleConfig, StyleOverride, merge, parse_style_definition,
};
