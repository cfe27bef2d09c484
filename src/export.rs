//! Exporting rendered documents as `.html` files

use std::io;
use std::path::{Path, PathBuf};

/// Derive a file stem from a document name
///
/// The name is trimmed and lower-cased, and every run of characters outside
/// `[a-z0-9_-]` becomes a single hyphen. Falls back to `template`.
pub fn sanitize_file_name(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    let mut in_run = false;

    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-' {
            cleaned.push(c);
            in_run = false;
        } else if !in_run {
            cleaned.push('-');
            in_run = true;
        }
    }

    if cleaned.is_empty() {
        "template".to_string()
    } else {
        cleaned
    }
}

/// File name an exported document is written to
pub fn export_file_name(name: &str) -> String {
    format!("{}.html", sanitize_file_name(name))
}

/// Write rendered HTML into `dir`, returning the path written
pub fn write_export(dir: &Path, document_name: &str, html: &str) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(document_name));
    std::fs::write(&path, html)?;
    Ok(path)
}
