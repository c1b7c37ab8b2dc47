//! JSON file version store

use chrono::{DateTime, Utc};
use mw_core::{StoreResult, VersionStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk payload
#[derive(Debug, Serialize, Deserialize)]
struct VersionDocument {
    version: i64,
    updated_at: DateTime<Utc>,
}

/// Version store persisted as a small JSON document.
///
/// A missing file reads as version 0, so a fresh target starts from the
/// pre-migration state without any setup step.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file is not created until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VersionStore for JsonFileStore {
    fn version(&self) -> StoreResult<i64> {
        if !self.path.exists() {
            return Ok(0);
        }

        let content = fs::read_to_string(&self.path)?;
        let document: VersionDocument = serde_json::from_str(&content)?;
        Ok(document.version)
    }

    /// Save the version atomically.
    ///
    /// Uses write-to-temp-then-rename to prevent a torn document if the
    /// process dies mid-write.
    fn set_version(&mut self, version: i64) -> StoreResult<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let document = VersionDocument {
            version,
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&document)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        log::debug!("Persisted version {version} to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
