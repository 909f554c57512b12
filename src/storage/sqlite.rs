//! `SQLite` storage implementation.
//!
//! Provides the keyed actor collection on top of `SQLite`, with the
//! schema and seed records created in a single transaction on first use.

// SQLite stores all integers as i64. Counts are never negative.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::core::{Actor, seed_actors};
use crate::error::{Error, Result, StorageError};
use crate::storage::schema::{
    CHECK_SCHEMA_SQL, CURRENT_SCHEMA_VERSION, GET_VERSION_SQL, INSERT_ACTOR_SQL, SCHEMA_SQL,
    SELECT_ACTOR_SQL, SELECT_ACTORS_SQL, SET_VERSION_SQL,
};
use crate::storage::traits::{Storage, StorageStats};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// SQLite-based storage implementation.
///
/// # Examples
///
/// ```no_run
/// use actor_store::storage::{SqliteStorage, Storage};
///
/// let mut storage = SqliteStorage::open(".actor-store/local.db").unwrap();
/// storage.init().unwrap();
/// assert_eq!(storage.actor_count().unwrap(), 3);
/// ```
pub struct SqliteStorage {
    /// `SQLite` connection.
    conn: Connection,
    /// Path to the database file (None for in-memory).
    path: Option<PathBuf>,
}

impl SqliteStorage {
    /// Opens or creates a `SQLite` database at the given path.
    ///
    /// The parent directory is created if it does not exist. The schema is
    /// not touched until [`Storage::init`] is called.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Open` if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let open_err = |reason: String| StorageError::Open {
            path: path.display().to_string(),
            reason,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| open_err(e.to_string()))?;
        }

        let conn = Connection::open(&path).map_err(|e| open_err(e.to_string()))?;

        // WAL mode returns the resulting mode as a row
        let _: String = conn
            .query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))
            .map_err(|e| open_err(e.to_string()))?;

        tracing::info!(path = %path.display(), "database opened");

        Ok(Self {
            conn,
            path: Some(path),
        })
    }

    /// Creates an in-memory `SQLite` database.
    ///
    /// Useful for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::Open {
            path: ":memory:".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { conn, path: None })
    }

    /// Returns the database path (None for in-memory).
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Gets the stored schema version, if any.
    fn schema_version(conn: &Connection) -> Result<Option<u32>> {
        let version: Option<String> = conn
            .query_row(GET_VERSION_SQL, [], |row| row.get(0))
            .optional()
            .map_err(StorageError::from)?;

        version
            .map(|v| {
                v.parse::<u32>().map_err(|_| {
                    Error::from(StorageError::Database(format!(
                        "corrupt schema version: {v:?}"
                    )))
                })
            })
            .transpose()
    }

    /// Inserts the seed records.
    fn seed(conn: &Connection) -> Result<()> {
        let mut stmt = conn.prepare(INSERT_ACTOR_SQL).map_err(StorageError::from)?;
        for actor in seed_actors() {
            stmt.execute(params![
                actor.id,
                actor.name,
                encode_categories(&actor.categories)?
            ])
            .map_err(StorageError::from)?;
        }
        Ok(())
    }

    fn schema_exists(&self) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(CHECK_SCHEMA_SQL, [], |row| row.get(0))
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }
}

impl Storage for SqliteStorage {
    fn init(&mut self) -> Result<()> {
        if self.schema_exists()? {
            if let Some(found) = Self::schema_version(&self.conn)?
                && found > CURRENT_SCHEMA_VERSION
            {
                return Err(StorageError::UnsupportedVersion {
                    found,
                    supported: CURRENT_SCHEMA_VERSION,
                }
                .into());
            }
            return Ok(());
        }

        let tx = self
            .conn
            .transaction()
            .map_err(|e| StorageError::Transaction(e.to_string()))?;
        tx.execute_batch(SCHEMA_SQL).map_err(StorageError::from)?;
        tx.execute(SET_VERSION_SQL, params![CURRENT_SCHEMA_VERSION.to_string()])
            .map_err(StorageError::from)?;
        Self::seed(&tx)?;
        tx.commit()
            .map_err(|e| StorageError::Transaction(e.to_string()))?;

        tracing::info!(
            version = CURRENT_SCHEMA_VERSION,
            "created actor collection and inserted initial data"
        );
        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        self.schema_exists()
    }

    fn reset(&mut self) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| StorageError::Transaction(e.to_string()))?;
        tx.execute("DELETE FROM actors", [])
            .map_err(StorageError::from)?;
        Self::seed(&tx)?;
        tx.commit()
            .map_err(|e| StorageError::Transaction(e.to_string()))?;
        Ok(())
    }

    fn get_actor(&self, id: i64) -> Result<Option<Actor>> {
        let actor = self
            .conn
            .query_row(SELECT_ACTOR_SQL, params![id], actor_from_row)
            .optional()
            .map_err(StorageError::from)?;
        Ok(actor)
    }

    fn list_actors(&self) -> Result<Vec<Actor>> {
        let mut stmt = self
            .conn
            .prepare(SELECT_ACTORS_SQL)
            .map_err(StorageError::from)?;

        let actors = stmt
            .query_map([], actor_from_row)
            .map_err(StorageError::from)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StorageError::from)?;

        Ok(actors)
    }

    fn update_actor(&mut self, actor: &Actor) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| StorageError::Transaction(e.to_string()))?;

        let existing = tx
            .query_row(SELECT_ACTOR_SQL, params![actor.id], actor_from_row)
            .optional()
            .map_err(StorageError::from)?
            .ok_or(StorageError::ActorNotFound { id: actor.id })?;

        let updated = existing.merged_with(actor);
        tx.execute(
            "UPDATE actors SET name = ?, categories = ? WHERE id = ?",
            params![
                updated.name,
                encode_categories(&updated.categories)?,
                updated.id
            ],
        )
        .map_err(StorageError::from)?;

        tx.commit()
            .map_err(|e| StorageError::Transaction(e.to_string()))?;
        Ok(())
    }

    fn delete_actor(&mut self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM actors WHERE id = ?", params![id])
            .map_err(StorageError::from)?;
        Ok(removed > 0)
    }

    fn actor_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM actors", [], |row| row.get(0))
            .map_err(StorageError::from)?;
        Ok(count as usize)
    }

    fn stats(&self) -> Result<StorageStats> {
        let actors = self.list_actors()?;
        let categories: BTreeSet<&str> = actors
            .iter()
            .flat_map(|a| a.categories.iter().map(String::as_str))
            .collect();

        let db_size = self
            .path
            .as_ref()
            .and_then(|p| std::fs::metadata(p).ok())
            .map(|m| m.len());

        Ok(StorageStats {
            actor_count: actors.len(),
            category_count: categories.len(),
            schema_version: Self::schema_version(&self.conn)?.unwrap_or(0),
            db_size,
        })
    }
}

/// Maps a `(id, name, categories)` row to an actor.
fn actor_from_row(row: &Row<'_>) -> rusqlite::Result<Actor> {
    let raw: String = row.get(2)?;
    let categories = serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(Actor {
        id: row.get(0)?,
        name: row.get(1)?,
        categories,
    })
}

fn encode_categories(categories: &[String]) -> Result<String> {
    Ok(serde_json::to_string(categories).map_err(StorageError::from)?)
}
