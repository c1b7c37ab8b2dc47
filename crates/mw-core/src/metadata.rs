//! Migration metadata: the version/description tag attached to every
//! registered migration.

use serde::{Deserialize, Serialize};

/// Version and description of a single migration.
///
/// The version orders and targets migrations; the description is used only
/// for diagnostics. A migration registered without metadata is excluded
/// from loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationMetadata {
    /// Version this migration brings the target system to when applied
    pub version: i64,

    /// Human-readable description
    pub description: String,
}

impl MigrationMetadata {
    /// Create metadata from a description and version
    pub fn new(description: impl Into<String>, version: i64) -> Self {
        Self {
            version,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_new() {
        let meta = MigrationMetadata::new("add widgets", 3);
        assert_eq!(meta.version, 3);
        assert_eq!(meta.description, "add widgets");
    }
}
