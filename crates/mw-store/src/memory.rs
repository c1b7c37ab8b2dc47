//! In-memory version store

use mw_core::{StoreResult, VersionStore};

/// Version store holding the version in memory.
///
/// Nothing survives the process; useful for tests and for hosts that do
/// their own persistence around a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    version: i64,
}

impl MemoryStore {
    /// Create a store at version 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store at an explicit starting version
    pub fn at_version(version: i64) -> Self {
        Self { version }
    }
}

impl VersionStore for MemoryStore {
    fn version(&self) -> StoreResult<i64> {
        Ok(self.version)
    }

    fn set_version(&mut self, version: i64) -> StoreResult<()> {
        self.version = version;
        Ok(())
    }
}
