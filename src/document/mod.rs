//! Template documents
//!
//! A document is an ordered list of component instances, each carrying the
//! setting overrides the user chose. Documents are values: editing produces a
//! new document.

mod editor;
mod legacy;
mod model;

pub use editor::{new_instance_id, EditError};
pub use legacy::{RawDocument, RawInstance};
pub use model::{TemplateDocument, TemplateInstance};
