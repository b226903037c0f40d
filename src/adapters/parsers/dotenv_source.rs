use std::path::Path;

use crate::core::errors::{Result, SlotSyncError};
use crate::core::models::config_entry::ConfigEntry;
use crate::core::traits::source::ConfigSource;

/// Reads `.env` files into key/value entries.
///
/// Supports:
/// - `KEY=value` entries
/// - Quoted values (`KEY="value"` and `KEY='value'`)
/// - Comment lines (`# ...`)
/// - Blank lines
///
/// Duplicate keys are allowed in the file; the last occurrence wins.
/// Order is preserved as read but carries no meaning for the upload.
pub struct DotenvSource;

impl DotenvSource {
    fn parse(path: &Path, content: &str) -> Result<Vec<ConfigEntry>> {
        let mut entries: Vec<ConfigEntry> = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line_number = idx + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some(eq_pos) = trimmed.find('=') else {
                return Err(SlotSyncError::ParseError {
                    file: path.to_path_buf(),
                    detail: format!("line {line_number}: expected KEY=value, got: {trimmed}"),
                });
            };

            let key = trimmed[..eq_pos].trim().to_string();
            if key.is_empty() {
                return Err(SlotSyncError::ParseError {
                    file: path.to_path_buf(),
                    detail: format!("line {line_number}: empty key"),
                });
            }

            let value = strip_quotes(trimmed[eq_pos + 1..].trim());

            // Last occurrence wins
            match entries.iter_mut().find(|e| e.key == key) {
                Some(existing) => existing.value = value,
                None => entries.push(ConfigEntry { key, value }),
            }
        }

        Ok(entries)
    }
}

/// Remove matching surrounding quotes (single or double) from a value.
fn strip_quotes(s: &str) -> String {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return s[1..s.len() - 1].to_string();
        }
    }
    s.to_string()
}

impl ConfigSource for DotenvSource {
    fn load(&self, path: &Path) -> Result<Vec<ConfigEntry>> {
        if !path.exists() {
            return Err(SlotSyncError::MissingLocalFile {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(path, &content)
    }
}
