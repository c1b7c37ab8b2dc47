use super::*;
use crate::error::MigrationResult;
use crate::migration::Migration;
use serde_json::json;

struct Noop;

impl Migration for Noop {
    fn up(&self) -> MigrationResult<()> {
        Ok(())
    }

    fn down(&self) -> MigrationResult<()> {
        Ok(())
    }
}

/// Migration whose constructor requires a string argument
struct Named {
    #[allow(dead_code)]
    name: String,
}

impl Migration for Named {
    fn up(&self) -> MigrationResult<()> {
        Ok(())
    }

    fn down(&self) -> MigrationResult<()> {
        Ok(())
    }
}

fn nullary(version: i64) -> Candidate {
    Candidate::new(
        MigrationMetadata::new(format!("migration {version}"), version),
        Factory::nullary(|| Box::new(Noop)),
    )
}

fn named(version: i64) -> Candidate {
    Candidate::new(
        MigrationMetadata::new("ctor migration", version),
        Factory::with_args(|args| {
            let name = args.first()?.as_str()?;
            Some(Box::new(Named {
                name: name.to_string(),
            }) as BoxedMigration)
        }),
    )
}

fn registry() -> Registry {
    Registry::new()
        .with(nullary(1))
        .with(nullary(2))
        .with(nullary(3))
        .with(named(4))
}

#[test]
fn test_load_without_args() {
    // Only candidates with a no-argument constructor load
    let set = registry().load(&[]);
    assert_eq!(set.len(), 3);
    for entry in &set {
        assert!(!entry.description().is_empty());
    }
}

#[test]
fn test_load_with_args() {
    let set = registry().load(&[json!("orders")]);
    assert_eq!(set.len(), 4);
}

#[test]
fn test_load_excludes_missing_metadata() {
    let reg = Registry::new()
        .with(nullary(1))
        .with(Candidate::without_metadata(Factory::nullary(|| {
            Box::new(Noop)
        })));

    let set = reg.load(&[]);
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].version(), 1);
}

#[test]
fn test_load_excludes_unsatisfied_factory() {
    // The factory wants a string; a number does not satisfy it
    let set = registry().load(&[json!(42)]);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_load_is_fresh_each_call() {
    let reg = registry();
    let first = reg.load(&[json!("orders")]);
    let second = reg.load(&[]);
    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 3);
}

#[test]
fn test_candidate_metadata_accessor() {
    let candidate = nullary(7);
    assert_eq!(candidate.metadata().unwrap().version, 7);
    assert!(Candidate::without_metadata(Factory::nullary(|| Box::new(Noop)))
        .metadata()
        .is_none());
}

#[test]
fn test_register_mutably() {
    let mut reg = Registry::new();
    reg.register(nullary(1)).register(nullary(2));
    assert_eq!(reg.len(), 2);
    assert!(!reg.is_empty());
}
