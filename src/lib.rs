//! Mailblocks - assemble email templates from predefined blocks
//!
//! This library provides the component catalog, the document model, an HTML
//! renderer and a small persistence layer for email templates built from
//! text, button, divider and image blocks.
//!
//! # Example
//!
//! ```rust
//! use mailblocks::{render, Catalog, TemplateDocument};
//!
//! let catalog = Catalog::builtin();
//! let doc = TemplateDocument::new("welcome", "Welcome")
//!     .with_instance(catalog.get("text").unwrap(), "intro")
//!     .unwrap();
//!
//! let output = render(&doc, &catalog);
//! assert!(output.html.contains("Sample text"));
//! assert!(output.warnings.is_empty());
//! ```

pub mod catalog;
pub mod document;
pub mod error;
pub mod export;
pub mod renderer;
pub mod store;
pub mod value;

pub use catalog::{Catalog, ComponentDefinition, Setting, SettingOption};
pub use document::{EditError, TemplateDocument, TemplateInstance};
pub use error::CatalogError;
pub use export::{export_file_name, sanitize_file_name};
pub use renderer::{render, render_with_config, RenderConfig, RenderOutput, RenderWarning};
pub use store::{StoreError, TemplateStore};
pub use value::{SettingKind, SettingValue};

/// Render a document given as JSON (canonical or legacy shape)
///
/// # Example
///
/// ```rust
/// use mailblocks::{render_json, Catalog};
///
/// let source = r#"{
///     "id": "d1",
///     "name": "Legacy",
///     "root": [{ "id": "a", "componentType": "divider", "props": { "thickness": 2 } }]
/// }"#;
///
/// let output = render_json(source, &Catalog::builtin()).unwrap();
/// assert!(output.html.contains("border-top: 2px solid #e5e7eb;"));
/// ```
pub fn render_json(source: &str, catalog: &Catalog) -> Result<RenderOutput, serde_json::Error> {
    let doc = TemplateDocument::from_json(source)?;
    Ok(render(&doc, catalog))
}
