use super::ClipboardError;
use arboard::Clipboard;

/// Reads the clipboard as caption text, dropping line breaks.
pub fn read_text() -> Result<String, ClipboardError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    normalize(&text)
}

fn normalize(text: &str) -> Result<String, ClipboardError> {
    let single_line = text.lines().map(str::trim).collect::<Vec<_>>().join(" ");
    let trimmed = single_line.trim();
    if trimmed.is_empty() {
        return Err(ClipboardError::Empty);
    }
    Ok(trimmed.to_string())
}
