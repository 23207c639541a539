use serde::de::DeserializeOwned;
use std::fs;

use crate::error::Result;

/// Reads `file_path` and deserializes its JSON contents into `T`.
///
/// An unreadable file surfaces as `Error::IoError`, malformed JSON as
/// `Error::DeserializationError`.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path)?;
    let parsed = serde_json::from_str(&data)?;
    Ok(parsed)
}
