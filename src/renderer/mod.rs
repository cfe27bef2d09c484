//! HTML renderer for template documents
//!
//! This module takes a document and a component catalog and produces an
//! HTML string together with non-fatal warnings about schema mismatches.

pub mod config;
pub mod html;
pub mod placeholder;
pub mod warning;

pub use config::RenderConfig;
pub use html::{render, render_with_config, RenderOutput};
pub use placeholder::escape_html;
pub use warning::{RenderWarning, WarningCategory};
