//! Error types for loading and validating component catalogs

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur when building a component catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two definitions share an id
    #[error("duplicate component definition: {id}")]
    DuplicateComponent { id: String },

    /// A definition has an empty or blank id
    #[error("component #{position} has an empty id")]
    EmptyComponentId { position: usize },

    /// A settings schema declares the same key twice
    #[error("duplicate setting key \"{key}\" in component {component}")]
    DuplicateSetting { component: String, key: String },
}

impl CatalogError {
    /// Location of the error in the catalog source, when known
    pub fn span(&self) -> Option<Span> {
        match self {
            CatalogError::Parse(err) => err.span(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a source location are returned as a single line
    /// prefixed with the file name.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = match self.span() {
            Some(span) => span,
            None => return format!("{}: {}", filename, self),
        };

        let message = match self {
            CatalogError::Parse(err) => err.message().to_string(),
            other => other.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid component catalog")
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, self),
        }
    }
}
