//! Text-source providers.
//!
//! Everything that touches the filesystem or clipboard lives here; the `text`
//! primitives only ever see a fully materialized `&str`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid file encoding: {0}")]
    InvalidEncoding(PathBuf),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Text pulled out of a source, tagged with where it came from
/// (`file:`, `pdf:`, `epub:` or `clipboard`).
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod plain;

/// Loads a document, picking the reader from the file extension.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedDocument, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        _ => plain::load(path),
    }
}

/// Counts the lines of a document the same way [`crate::text::count_lines`] does.
pub fn count_file_lines(path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let doc = load(path)?;
    Ok(crate::text::count_lines(&doc.text))
}
