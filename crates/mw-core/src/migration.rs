//! The migration capability

use crate::error::MigrationResult;

/// A reversible, versioned unit of change applied to an external target
/// system.
///
/// Implementations are stateless and re-invocable: the orchestrator may
/// call `up` or `down` on the same instance across multiple runs. Both
/// operations block until the underlying change completes; there is no
/// partial-step recovery inside a single migration, so a failure aborts
/// the entire run.
///
/// Execution is single-threaded, so implementations are not required to be
/// `Send` or `Sync`.
pub trait Migration {
    /// Apply the forward change.
    fn up(&self) -> MigrationResult<()>;

    /// Reverse the forward change exactly.
    fn down(&self) -> MigrationResult<()>;
}

/// Owned, type-erased migration as produced by a factory
pub type BoxedMigration = Box<dyn Migration>;
