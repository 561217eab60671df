use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::DocumentError;

pub fn parse_document(text: &str) -> Result<Value, DocumentError> {
    serde_json::from_str(text).map_err(DocumentError::Parse)
}

/// Renders with 2-space indentation, keeping mapping keys in the order they
/// were parsed (or inserted).
pub fn render_document(document: &Value) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(document).map_err(DocumentError::Render)
}

pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let text = fs::read_to_string(path)?;
    parse_document(&text)
}

pub fn save_document(path: &Path, document: &Value) -> Result<(), DocumentError> {
    let text = render_document(document)?;
    fs::write(path, text)?;
    Ok(())
}
