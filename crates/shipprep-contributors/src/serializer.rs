// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! Serialization of contributor sets
//!
//! The serialized form feeds downstream release-notes generation, so it
//! must be byte-stable for identical inputs: contributors are emitted in
//! descending contribution order, ties broken by name.

use std::path::Path;

use tracing::debug;

use crate::contributor::ContributorSet;
use crate::error::ContributorsError;

/// Render a contributor set as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_json(set: &ContributorSet) -> Result<String, ContributorsError> {
    Ok(serde_json::to_string_pretty(set)?)
}

/// Serialize a contributor set and write it to `path`, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_json(set: &ContributorSet, path: &Path) -> Result<(), ContributorsError> {
    let json = to_json(set)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, json)?;
    debug!(path = %path.display(), contributors = set.len(), "wrote contributor file");
    Ok(())
}

/// Parse a contributor set previously written by [`write_json`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains invalid or
/// duplicate contributor entries.
pub fn read_json(path: &Path) -> Result<ContributorSet, ContributorsError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
