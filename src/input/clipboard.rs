use super::{LoadError, LoadedDocument};

/// Load the current clipboard text using arboard.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    log::debug!("Loaded {} bytes from clipboard", text.len());

    Ok(LoadedDocument {
        text,
        source: "clipboard".to_string(),
    })
}
