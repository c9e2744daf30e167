//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads input text, replacing invalid UTF-8 with U+FFFD
pub struct FileReader;

impl FileReader {
    /// Read a file as text
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self::decode(bytes, &path.display().to_string()))
    }

    /// Read all of `reader` as text
    pub fn read_from<R: Read>(mut reader: R, name: &str) -> Result<String> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read {name}"))?;
        Ok(Self::decode(bytes, name))
    }

    /// Read standard input as text
    pub fn read_stdin() -> Result<String> {
        Self::read_from(io::stdin().lock(), "standard input")
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;
        Ok(metadata.len())
    }

    fn decode(bytes: Vec<u8>, name: &str) -> String {
        match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{name} is not valid UTF-8; invalid bytes replaced");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        }
    }
}
