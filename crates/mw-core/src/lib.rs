//! mw-core - Core migration engine for Millwright
//!
//! This crate provides the migration capability and metadata, the explicit
//! candidate registry that replaces runtime type discovery, the
//! direction/window predicates, and the orchestrator that applies
//! migrations in version order while keeping the persisted schema version
//! consistent with partially-completed runs.

pub mod diagnostics;
pub mod error;
pub mod metadata;
pub mod migration;
pub mod plan;
pub mod registry;
pub mod service;
pub mod set;
pub mod store;

pub use diagnostics::{Diagnostic, DiagnosticSink, FnSink, LogSink};
pub use error::{CoreError, CoreResult, MigrationError, MigrationResult};
pub use metadata::MigrationMetadata;
pub use migration::{BoxedMigration, Migration};
pub use plan::{Direction, MigrationPlan, PlannedStep, Window};
pub use registry::{Candidate, Factory, Registry};
pub use service::{AppliedStep, Migrator, MigratorOptions, RunReport};
pub use set::{MigrationEntry, MigrationSet};
pub use store::{StoreError, StoreResult, VersionStore};
