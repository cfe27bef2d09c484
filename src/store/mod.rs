//! Persistence of template documents
//!
//! Documents live in a [`KeyValueArea`] under `oeb:template:<id>`, next to an
//! index of `{ id, name, updatedAt }` summaries. Documents that fail to parse
//! are reported as not found rather than as errors.

mod area;
mod templates;

use thiserror::Error;

pub use area::{DirectoryArea, KeyValueArea, MemoryArea};
pub use templates::{
    template_key, TemplateListItem, TemplateStore, DEFAULT_TEMPLATE_NAME, TEMPLATE_INDEX_KEY,
};

/// Errors that can occur while reading or writing templates
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium is unavailable
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize template: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template not found: {id}")]
    NotFound { id: String },
}
