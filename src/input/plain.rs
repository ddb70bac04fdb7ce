use super::{LoadError, LoadedDocument};
use std::io;
use std::path::Path;

/// Load a UTF-8 text file in full.
///
/// An empty file is a valid, empty document.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        io::ErrorKind::InvalidData => LoadError::InvalidEncoding(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    log::debug!("Loaded {} bytes from {}", text.len(), path.display());

    Ok(LoadedDocument {
        text,
        source: format!("file:{}", path.display()),
    })
}
