//! Storage layer for actor-store.
//!
//! Provides the single keyed actor collection using `SQLite`. The storage
//! layer handles connection setup, first-run seeding, and the
//! read/update/delete primitives used by the facade.

pub mod schema;
pub mod sqlite;
pub mod traits;

pub use schema::{CURRENT_SCHEMA_VERSION, SCHEMA_SQL};
pub use sqlite::SqliteStorage;
pub use traits::{Storage, StorageStats};

/// Default database path relative to the working directory. The file
/// stem is the logical database name, `local`.
pub const DEFAULT_DB_PATH: &str = ".actor-store/local.db";
