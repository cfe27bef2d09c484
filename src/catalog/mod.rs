//! Component catalog
//!
//! A catalog is the closed set of block types a document can be assembled
//! from. Each [`ComponentDefinition`] pairs an HTML template containing
//! `{{key}}` placeholders with the settings schema that fills them.
//!
//! # Example
//!
//! ```text
//! [[components]]
//! id = "spacer"
//! template = '<div style="height: {{height}}px"></div>'
//!
//! [[components.settings]]
//! key = "height"
//! label = "Height"
//! type = "number"
//! default = 24
//! ```

mod builtin;
mod definition;
mod registry;

pub use builtin::BUILTIN_CATALOG;
pub use definition::{ComponentDefinition, Setting, SettingOption};
pub use registry::Catalog;
