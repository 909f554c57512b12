//! Storage trait definition.
//!
//! Defines the interface for the keyed actor collection, enabling
//! pluggable storage implementations.

use crate::core::Actor;
use crate::error::Result;
use serde::Serialize;

/// Trait for persistent storage backends.
///
/// Each mutating operation is atomic: it either fully applies inside one
/// transaction or leaves the collection untouched.
pub trait Storage: Send {
    /// Initializes storage.
    ///
    /// Creates the collection and inserts the seed records when the store
    /// has never been initialized. Safe to call multiple times; seeding
    /// happens only once.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails or the stored schema
    /// version is newer than this build supports.
    fn init(&mut self) -> Result<()>;

    /// Checks if storage is initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the check cannot be performed.
    fn is_initialized(&self) -> Result<bool>;

    /// Removes every actor and inserts the seed records again.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    fn reset(&mut self) -> Result<()>;

    /// Retrieves an actor by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_actor(&self, id: i64) -> Result<Option<Actor>>;

    /// Lists all actors in key order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_actors(&self) -> Result<Vec<Actor>>;

    /// Overwrites `name` and `categories` of the stored actor with the
    /// same id. The id itself is never changed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ActorNotFound` if no actor has that id, or
    /// an error if the write fails.
    fn update_actor(&mut self, actor: &Actor) -> Result<()>;

    /// Deletes an actor by id.
    ///
    /// Returns `true` if a record was removed. Deleting a missing id is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    fn delete_actor(&mut self, id: i64) -> Result<bool>;

    /// Returns the number of stored actors.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails.
    fn actor_count(&self) -> Result<usize>;

    /// Gets storage statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if statistics cannot be gathered.
    fn stats(&self) -> Result<StorageStats>;
}

/// Storage statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    /// Number of actors stored.
    pub actor_count: usize,
    /// Number of distinct category tags across all actors.
    pub category_count: usize,
    /// Schema version.
    pub schema_version: u32,
    /// Database file size in bytes (if applicable).
    pub db_size: Option<u64>,
}
