//! Migration discovery: an explicit registry of constructible candidates.
//!
//! The host process registers each migration as a factory paired with its
//! metadata; loading walks the registrations, constructs the eligible ones,
//! and produces the orchestrator's migration set. Ineligible candidates
//! (missing metadata, or a constructor whose arguments were not supplied)
//! are skipped silently: they are simply unavailable this run, not an
//! error.

use crate::metadata::MigrationMetadata;
use crate::migration::BoxedMigration;
use crate::set::{MigrationEntry, MigrationSet};
use serde_json::Value;

/// Constructor for a registered migration.
///
/// `Nullary` constructs with no arguments. `WithArgs` receives the
/// loader's argument list and returns `None` when the arguments do not
/// satisfy it, which excludes the candidate from that load.
pub enum Factory {
    /// Construct with no arguments
    Nullary(Box<dyn Fn() -> BoxedMigration>),

    /// Construct from the caller-supplied argument list
    WithArgs(Box<dyn Fn(&[Value]) -> Option<BoxedMigration>>),
}

impl Factory {
    /// Wrap a no-argument constructor
    pub fn nullary(f: impl Fn() -> BoxedMigration + 'static) -> Self {
        Factory::Nullary(Box::new(f))
    }

    /// Wrap a constructor that consumes the loader's argument list
    pub fn with_args(f: impl Fn(&[Value]) -> Option<BoxedMigration> + 'static) -> Self {
        Factory::WithArgs(Box::new(f))
    }
}

/// A constructible unit offered to the loader.
pub struct Candidate {
    metadata: Option<MigrationMetadata>,
    factory: Factory,
}

impl Candidate {
    /// Register a migration with its metadata
    pub fn new(metadata: MigrationMetadata, factory: Factory) -> Self {
        Self {
            metadata: Some(metadata),
            factory,
        }
    }

    /// Register a unit with no metadata.
    ///
    /// Such a candidate is never loaded; it exists so hosts can keep a
    /// registration list uniform while a migration's metadata is still
    /// pending elsewhere.
    pub fn without_metadata(factory: Factory) -> Self {
        Self {
            metadata: None,
            factory,
        }
    }

    /// Metadata attached at registration, if any
    pub fn metadata(&self) -> Option<&MigrationMetadata> {
        self.metadata.as_ref()
    }

    /// Construct the migration, or `None` when the supplied arguments do
    /// not satisfy the factory.
    fn construct(&self, args: &[Value]) -> Option<BoxedMigration> {
        match &self.factory {
            Factory::Nullary(f) => Some(f()),
            Factory::WithArgs(f) if !args.is_empty() => f(args),
            Factory::WithArgs(_) => None,
        }
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// Ordered list of candidates supplied by the host at startup.
///
/// Registration order is irrelevant to execution; the loaded set is
/// re-sorted by version before every run.
#[derive(Debug, Default)]
pub struct Registry {
    candidates: Vec<Candidate>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate
    pub fn register(&mut self, candidate: Candidate) -> &mut Self {
        self.candidates.push(candidate);
        self
    }

    /// Builder-style registration
    pub fn with(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Number of registered candidates (eligible or not)
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Construct every eligible candidate into a fresh migration set.
    ///
    /// Per candidate: a nullary factory always constructs; a with-args
    /// factory constructs only when `args` is non-empty and the factory
    /// accepts them; instances without metadata are excluded. Exclusions
    /// are silent.
    pub fn load(&self, args: &[Value]) -> MigrationSet {
        let mut set = MigrationSet::new();

        for candidate in &self.candidates {
            let Some(migration) = candidate.construct(args) else {
                log::debug!("Skipping candidate: constructor arguments not satisfied");
                continue;
            };

            let Some(metadata) = candidate.metadata() else {
                log::debug!("Skipping candidate: no migration metadata");
                continue;
            };

            set.push(MigrationEntry::new(metadata.clone(), migration));
        }

        log::debug!(
            "Loaded {} of {} registered candidates",
            set.len(),
            self.candidates.len()
        );
        set
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
