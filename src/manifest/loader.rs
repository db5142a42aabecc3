use crate::{ManifestError, SubnetEntry};
use serde::Deserialize;
use std::fs;

/// Top-level shape of the manifest file
#[derive(Debug, Deserialize)]
struct SubnetFile {
    #[serde(default)]
    subnets: Vec<SubnetEntry>,
}

/// Load subnet entries from the JSON manifest at `path`
///
/// Entries are returned in file order. Parsing is permissive: missing fields
/// decode to empty strings and unknown fields are ignored.
///
/// # Returns
/// * `Ok(Vec<SubnetEntry>)` with the parsed entries
/// * `Err(ManifestError::Io)` if the file cannot be read
/// * `Err(ManifestError::Parse)` if the JSON is malformed
pub fn load(path: &str) -> Result<Vec<SubnetEntry>, ManifestError> {
    let raw = fs::read_to_string(path)?;

    let file: SubnetFile = serde_json::from_str(&raw)?;

    Ok(file.subnets)
}
