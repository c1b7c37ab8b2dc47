//! The migration orchestrator.
//!
//! Holds the loaded migration set and the version store handle, and
//! drives runs: sort, snapshot the stored version, build the inclusion
//! window, walk the whole set applying eligible steps, and persist the
//! version immediately after each success so an interrupted run leaves the
//! store reflecting exactly the steps that completed.

use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::error::{CoreError, CoreResult};
use crate::plan::{Direction, MigrationPlan, PlannedStep, Window};
use crate::registry::Registry;
use crate::set::{MigrationEntry, MigrationSet};
use crate::store::VersionStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use uuid::Uuid;

/// Orchestrator options.
///
/// Serde-deserializable so hosts can embed it in their own configuration
/// files; every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigratorOptions {
    /// Emit a diagnostic when consecutively applied versions differ by
    /// more than one
    pub warn_on_gaps: bool,
}

impl Default for MigratorOptions {
    fn default() -> Self {
        Self { warn_on_gaps: true }
    }
}

/// One successfully applied step of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedStep {
    /// Version of the applied migration
    pub version: i64,

    /// Its description
    pub description: String,

    /// How long the step took to execute (in milliseconds)
    pub duration_ms: u64,
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Short unique identifier for this run
    pub run_id: String,

    /// Direction the run executed in
    pub direction: Direction,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished
    pub finished_at: DateTime<Utc>,

    /// Steps applied, in execution order
    pub steps: Vec<AppliedStep>,
}

impl RunReport {
    fn begin(direction: Direction) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string()[..8].to_string(),
            direction,
            started_at: Utc::now(),
            finished_at: Utc::now(),
            steps: Vec::new(),
        }
    }
}

/// The migration orchestrator.
///
/// Generic over the version store so durable and in-memory stores plug in
/// alike; the store's external lifecycle stays the host's concern and can
/// be recovered with [`Migrator::into_store`]. Execution is strictly
/// sequential; callers serialize their own invocations when multiple
/// might run against the same store.
pub struct Migrator<S: VersionStore> {
    store: S,
    migrations: MigrationSet,
    sink: Box<dyn DiagnosticSink>,
    options: MigratorOptions,
}

impl<S: VersionStore> Migrator<S> {
    /// Create an orchestrator with default options and the `log`-backed
    /// diagnostic sink
    pub fn new(store: S) -> Self {
        Self::with_options(store, MigratorOptions::default())
    }

    /// Create an orchestrator with explicit options
    pub fn with_options(store: S, options: MigratorOptions) -> Self {
        Self {
            store,
            migrations: MigrationSet::new(),
            sink: Box::new(LogSink),
            options,
        }
    }

    /// Replace the diagnostic sink
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Load eligible migrations from `registry`, replacing any previously
    /// loaded set wholesale.
    pub fn load_from(&mut self, registry: &Registry, args: &[Value]) {
        self.migrations = registry.load(args);
    }

    /// Replace the loaded set directly (test setup and manual overrides)
    pub fn set_migrations(&mut self, migrations: MigrationSet) {
        self.migrations = migrations;
    }

    /// The loaded set
    pub fn migrations(&self) -> &MigrationSet {
        &self.migrations
    }

    /// Mutable access to the loaded set
    pub fn migrations_mut(&mut self) -> &mut MigrationSet {
        &mut self.migrations
    }

    /// Entry at `index`, if in bounds
    pub fn migration(&self, index: usize) -> Option<&MigrationEntry> {
        self.migrations.get(index)
    }

    /// Replace the entry at `index`; panics when out of bounds
    pub fn set_migration(&mut self, index: usize, entry: MigrationEntry) {
        self.migrations.set(index, entry);
    }

    /// The version store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the version store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the orchestrator, returning its store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply every migration above the current stored version, ascending.
    pub fn run_up(&mut self) -> CoreResult<RunReport> {
        let snapshot = self.store.version()?;
        self.run(Window::up(snapshot))
    }

    /// Apply every migration above the current stored version, up to and
    /// including `target`, ascending.
    pub fn run_up_to(&mut self, target: i64) -> CoreResult<RunReport> {
        let snapshot = self.store.version()?;
        self.run(Window::up_to(snapshot, target))
    }

    /// Undo every migration at or below the current stored version,
    /// descending.
    ///
    /// This rolls the target system all the way back to its pre-migration
    /// state (version 0), not back one step. Use [`Migrator::run_down_to`]
    /// or [`Migrator::migrate_to`] for partial rollback.
    pub fn run_down(&mut self) -> CoreResult<RunReport> {
        let snapshot = self.store.version()?;
        self.run(Window::down(snapshot))
    }

    /// Undo every migration strictly above `target`, descending, leaving
    /// the stored version equal to `target`.
    pub fn run_down_to(&mut self, target: i64) -> CoreResult<RunReport> {
        let snapshot = self.store.version()?;
        self.run(Window::down_to(snapshot, target))
    }

    /// Converge the stored version to `target`: upgrade when above the
    /// current version, downgrade when below, no-op when equal.
    pub fn migrate_to(&mut self, target: i64) -> CoreResult<RunReport> {
        let current = self.store.version()?;
        if target < current {
            self.run(Window::down_to(current, target))
        } else {
            if target == current {
                log::debug!("Already at version {current}, nothing to migrate");
            }
            // The up window is vacuously empty when target == current
            self.run(Window::up_to(current, target))
        }
    }

    /// Preview the steps a run with this direction/target would apply,
    /// without executing anything or touching the loaded set's order.
    pub fn plan(&self, direction: Direction, target: Option<i64>) -> CoreResult<MigrationPlan> {
        let snapshot = self.store.version()?;
        let window = Window::new(direction, snapshot, target);

        let mut steps: Vec<PlannedStep> = self
            .migrations
            .iter()
            .filter(|entry| window.includes(entry.version()))
            .map(|entry| PlannedStep {
                version: entry.version(),
                description: entry.description().to_string(),
            })
            .collect();

        steps.sort_by_key(|step| step.version);
        if direction == Direction::Down {
            steps.reverse();
        }

        Ok(MigrationPlan {
            direction,
            from_version: snapshot,
            target,
            steps,
        })
    }

    /// Execute one run over the given window.
    ///
    /// Walks the entire sorted set, testing the window per element rather
    /// than short-circuiting, because the set may be sparse or unordered
    /// relative to version.
    fn run(&mut self, window: Window) -> CoreResult<RunReport> {
        let direction = window.direction();
        match direction {
            Direction::Up => self.migrations.sort_ascending(),
            Direction::Down => self.migrations.sort_descending(),
        }

        log::debug!(
            "Starting {direction} run from v{} (target: {:?}, {} migrations loaded)",
            window.snapshot(),
            window.target(),
            self.migrations.len()
        );

        let mut report = RunReport::begin(direction);
        let mut previous_applied: Option<i64> = None;

        for entry in self.migrations.iter() {
            if !window.includes(entry.version()) {
                continue;
            }

            let started = Instant::now();
            let result = match direction {
                Direction::Up => entry.up(),
                Direction::Down => entry.down(),
            };
            result.map_err(|source| CoreError::StepFailed {
                version: entry.version(),
                description: entry.description().to_string(),
                direction,
                source,
            })?;

            // Persist immediately, never batched. Going down the stored
            // version is one below the step just undone: the step at the
            // new floor is never itself undone by a later step.
            let persisted = match direction {
                Direction::Up => entry.version(),
                Direction::Down => entry.version() - 1,
            };
            self.store.set_version(persisted)?;

            if self.options.warn_on_gaps {
                if let Some(previous) = previous_applied {
                    if (entry.version() - previous).abs() != 1 {
                        self.sink.emit(&Diagnostic::VersionGap {
                            from: previous,
                            to: entry.version(),
                        });
                    }
                }
            }
            previous_applied = Some(entry.version());

            self.sink.emit(&Diagnostic::StepApplied {
                version: entry.version(),
                description: entry.description().to_string(),
                direction,
            });
            report.steps.push(AppliedStep {
                version: entry.version(),
                description: entry.description().to_string(),
                duration_ms: started.elapsed().as_millis() as u64,
            });
        }

        report.finished_at = Utc::now();
        log::debug!(
            "Finished {direction} run {}: {} steps applied",
            report.run_id,
            report.steps.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
