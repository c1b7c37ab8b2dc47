//! mw-store - Version store backends for Millwright
//!
//! This crate provides `VersionStore` implementations: an in-memory store
//! for tests and ephemeral runs, a JSON file store with atomic writes, and
//! a DuckDB-backed store.

pub mod duckdb;
pub mod file;
pub mod memory;

pub use crate::duckdb::DuckDbStore;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
