//! Error types for mw-core

use crate::plan::Direction;
use crate::store::StoreError;
use thiserror::Error;

/// Error returned by an individual migration step.
///
/// Migrations side-effect an external target system, so the variants here
/// are deliberately open-ended: a plain message, or a preserved source
/// error from whatever driver the migration uses.
#[derive(Error, Debug)]
pub enum MigrationError {
    /// Step reported a failure (G001)
    #[error("[G001] Migration step failed: {0}")]
    Step(String),

    /// Error from the external target system with preserved source (G002)
    #[error("[G002] Target system error")]
    Target(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for a migration step
pub type MigrationResult<T> = Result<T, MigrationError>;

/// Error returned by an orchestrator run.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A migration step failed mid-run; the run halts here (G003)
    #[error("[G003] Migration v{version} ({description}) failed running {direction}")]
    StepFailed {
        version: i64,
        description: String,
        direction: Direction,
        #[source]
        source: MigrationError,
    },

    /// The version store failed to read or persist the version (G004)
    #[error("[G004] Version store operation failed")]
    Store(#[from] StoreError),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
