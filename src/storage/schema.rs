//! Database schema definitions.
//!
//! Contains the SQL for the keyed actor collection. The schema is created
//! once, together with the seed records, the first time a database is
//! initialized. There are no upgrade steps: a version newer than
//! [`CURRENT_SCHEMA_VERSION`] is rejected.

/// Current schema version.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Name of the keyed actor collection.
pub const ACTORS_TABLE: &str = "actors";

/// SQL schema for initial database setup.
pub const SCHEMA_SQL: &str = r"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_info (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Keyed actor collection
CREATE TABLE IF NOT EXISTS actors (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    categories TEXT NOT NULL  -- JSON array of tags, order preserved
);

-- Secondary indexes (declared, not used for ordering)
CREATE INDEX IF NOT EXISTS idx_actors_name ON actors(name);
CREATE INDEX IF NOT EXISTS idx_actors_categories ON actors(categories);
";

/// SQL to check if schema is initialized.
pub const CHECK_SCHEMA_SQL: &str = r"
SELECT COUNT(*) FROM sqlite_master
WHERE type='table' AND name='schema_info';
";

/// SQL to get schema version.
pub const GET_VERSION_SQL: &str = r"
SELECT value FROM schema_info WHERE key = 'version';
";

/// SQL to set schema version.
pub const SET_VERSION_SQL: &str = r"
INSERT OR REPLACE INTO schema_info (key, value) VALUES ('version', ?);
";

/// SQL to insert one actor.
pub const INSERT_ACTOR_SQL: &str = r"
INSERT INTO actors (id, name, categories) VALUES (?, ?, ?);
";

/// SQL to read every actor in key order.
pub const SELECT_ACTORS_SQL: &str = r"
SELECT id, name, categories FROM actors ORDER BY id;
";

/// SQL to read one actor by key.
pub const SELECT_ACTOR_SQL: &str = r"
SELECT id, name, categories FROM actors WHERE id = ?;
";
