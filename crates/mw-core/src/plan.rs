//! Direction, inclusion window, and run preview.
//!
//! The window is the per-migration inclusion test for one run. It is
//! computed once from a snapshot of the stored version and an optional
//! target, before iteration begins, so its verdict for a given migration
//! cannot flip partway through the run.

use serde::{Deserialize, Serialize};

/// Direction of a migration run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Forward: apply migrations not yet applied
    Up,
    /// Reverse: undo applied migrations
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Inclusion rule for one run.
///
/// Boundary semantics: a migration whose version exactly equals the
/// snapshot is excluded going up and included (unbounded) going down.
/// Bounded down runs undo everything strictly above the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    direction: Direction,
    snapshot: i64,
    target: Option<i64>,
}

impl Window {
    /// Build a window from an explicit direction and optional target
    pub fn new(direction: Direction, snapshot: i64, target: Option<i64>) -> Self {
        Self {
            direction,
            snapshot,
            target,
        }
    }

    /// Unbounded up: everything above the snapshot
    pub fn up(snapshot: i64) -> Self {
        Self::new(Direction::Up, snapshot, None)
    }

    /// Bounded up: everything above the snapshot, at or below `target`
    pub fn up_to(snapshot: i64, target: i64) -> Self {
        Self::new(Direction::Up, snapshot, Some(target))
    }

    /// Unbounded down: everything at or below the snapshot
    pub fn down(snapshot: i64) -> Self {
        Self::new(Direction::Down, snapshot, None)
    }

    /// Bounded down: everything strictly above `target`, at or below the
    /// snapshot
    pub fn down_to(snapshot: i64, target: i64) -> Self {
        Self::new(Direction::Down, snapshot, Some(target))
    }

    /// Direction this window was built for
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Stored version snapshot the window was computed from
    pub fn snapshot(&self) -> i64 {
        self.snapshot
    }

    /// Optional requested target version
    pub fn target(&self) -> Option<i64> {
        self.target
    }

    /// Whether a migration at `version` executes in this run
    pub fn includes(&self, version: i64) -> bool {
        match (self.direction, self.target) {
            (Direction::Up, None) => version > self.snapshot,
            (Direction::Up, Some(target)) => version > self.snapshot && version <= target,
            (Direction::Down, None) => version <= self.snapshot,
            (Direction::Down, Some(target)) => version > target && version <= self.snapshot,
        }
    }
}

/// One step of a previewed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedStep {
    /// Version of the migration that would run
    pub version: i64,

    /// Its description
    pub description: String,
}

/// Side-effect-free preview of the steps a run would apply, in the order
/// it would apply them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationPlan {
    /// Direction the plan was computed for
    pub direction: Direction,

    /// Stored version at the time the plan was computed
    pub from_version: i64,

    /// Requested target, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,

    /// Steps the run would apply
    pub steps: Vec<PlannedStep>,
}

impl MigrationPlan {
    /// Number of steps the run would apply
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the run would apply nothing
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
