use super::*;
use tempfile::tempdir;

#[test]
fn test_fresh_database_reads_zero() {
    let store = DuckDbStore::open_memory().unwrap();
    assert_eq!(store.version().unwrap(), 0);
}

#[test]
fn test_set_and_get() {
    let mut store = DuckDbStore::open_memory().unwrap();

    store.set_version(3).unwrap();
    assert_eq!(store.version().unwrap(), 3);

    // Version moves down too
    store.set_version(1).unwrap();
    assert_eq!(store.version().unwrap(), 1);
}

#[test]
fn test_single_current_row() {
    let mut store = DuckDbStore::open_memory().unwrap();
    store.set_version(1).unwrap();
    store.set_version(2).unwrap();

    let count: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("versions.duckdb");

    {
        let mut store = DuckDbStore::open(&path).unwrap();
        store.set_version(5).unwrap();
    }

    let reopened = DuckDbStore::open(&path).unwrap();
    assert_eq!(reopened.version().unwrap(), 5);
}

#[test]
fn test_ensure_table_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("versions.duckdb");

    {
        DuckDbStore::open(&path).unwrap();
    }
    // Re-opening must not clobber or fail on the existing table
    DuckDbStore::open(&path).unwrap();
}
