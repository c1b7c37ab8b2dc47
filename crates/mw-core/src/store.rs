//! Version store contract.
//!
//! The store holds the single piece of persisted state: the integer version
//! of the latest fully-applied migration. The orchestrator reads it once
//! per run to build the inclusion window and writes it immediately after
//! each successfully applied step, so an interrupted run leaves the store
//! reflecting exactly the steps that completed.

use thiserror::Error;

/// Version store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or create the backing store (S001)
    #[error("[S001] Version store connection failed: {0}")]
    Connection(String),

    /// Failed to read the persisted version (S002)
    #[error("[S002] Failed to read version: {0}")]
    Read(String),

    /// Failed to persist a new version (S003)
    #[error("[S003] Failed to write version: {0}")]
    Write(String),

    /// IO error from a file-backed store (S004)
    #[error("[S004] Version store IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error from a file-backed store (S005)
    #[error("[S005] Version store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Persisted accessor for the current schema version.
///
/// Durable implementations must survive process restarts for the
/// do-not-re-apply guarantee to hold. No transactional semantics are
/// assumed; the orchestrator is the only mutator during a run and callers
/// serialize their own invocations.
pub trait VersionStore {
    /// Read the current schema version.
    fn version(&self) -> StoreResult<i64>;

    /// Persist a new schema version.
    fn set_version(&mut self, version: i64) -> StoreResult<()>;
}
