//! Data access facade.
//!
//! [`ActorService`] owns one process-wide store handle and exposes the
//! operations the front end uses: fetch-sorted, update and delete, plus a
//! few read-only helpers. Every operation runs on tokio's blocking pool
//! while holding the store lock, so callers await a single future and
//! transactions against the collection never interleave.
//!
//! Failures are logged and returned; nothing is swallowed.

use crate::core::Actor;
use crate::error::{Error, Result, StorageError};
use crate::query::{SortSpec, sort_actors};
use crate::storage::{SqliteStorage, Storage, StorageStats};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Async facade over a [`Storage`] backend.
pub struct ActorService<S = SqliteStorage> {
    /// `None` once the service has been closed.
    store: Arc<Mutex<Option<S>>>,
}

impl<S> Clone for ActorService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl ActorService<SqliteStorage> {
    /// Opens the database at `path`, initializing and seeding it on first
    /// use.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the schema cannot
    /// be created.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let storage = blocking("open", move || {
            let mut storage = SqliteStorage::open(&path)?;
            storage.init()?;
            Ok(storage)
        })
        .await?;
        Ok(Self::new(storage))
    }

    /// Opens a seeded in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub async fn in_memory() -> Result<Self> {
        let storage = blocking("open_in_memory", || {
            let mut storage = SqliteStorage::in_memory()?;
            storage.init()?;
            Ok(storage)
        })
        .await?;
        Ok(Self::new(storage))
    }
}

impl<S: Storage + 'static> ActorService<S> {
    /// Wraps an already initialized storage backend.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            store: Arc::new(Mutex::new(Some(storage))),
        }
    }

    /// Returns every actor ordered by `spec`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub async fn fetch_all_sorted(&self, spec: SortSpec) -> Result<Vec<Actor>> {
        tracing::debug!(field = %spec.field, order = %spec.order, "fetching actors");
        self.run("fetch_all_sorted", move |storage| {
            let mut actors = storage.list_actors()?;
            sort_actors(&mut actors, spec);
            Ok(actors)
        })
        .await
    }

    /// Overwrites the name and categories of the actor with `actor.id`.
    ///
    /// Resolves once the write has been committed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ActorNotFound` if no actor has that id.
    pub async fn update(&self, actor: &Actor) -> Result<()> {
        let actor = actor.clone();
        let id = actor.id;
        tracing::debug!(id, "updating actor");
        self.run("update", move |storage| storage.update_actor(&actor))
            .await?;
        tracing::info!(id, "actor updated");
        Ok(())
    }

    /// Deletes the actor with `id`. Deleting a missing id succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete statement fails.
    pub async fn delete(&self, id: i64) -> Result<()> {
        tracing::debug!(id, "deleting actor");
        let removed = self
            .run("delete", move |storage| storage.delete_actor(id))
            .await?;
        if removed {
            tracing::info!(id, "actor deleted");
        } else {
            tracing::debug!(id, "no actor with this id, nothing deleted");
        }
        Ok(())
    }

    /// Looks up one actor by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get(&self, id: i64) -> Result<Option<Actor>> {
        self.run("get", move |storage| storage.get_actor(id)).await
    }

    /// Returns storage statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if statistics cannot be gathered.
    pub async fn stats(&self) -> Result<StorageStats> {
        self.run("stats", |storage| storage.stats()).await
    }

    /// Replaces the collection with the seed records.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub async fn reset(&self) -> Result<()> {
        self.run("reset", |storage| storage.reset()).await?;
        tracing::info!("actor store reset to initial data");
        Ok(())
    }

    /// Releases the store handle. Later operations fail with
    /// `StorageError::Closed`. Closing twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    pub async fn close(&self) -> Result<()> {
        let store = Arc::clone(&self.store);
        blocking("close", move || {
            let mut guard = store.lock().map_err(|_| StorageError::Poisoned)?;
            drop(guard.take());
            Ok(())
        })
        .await?;
        tracing::debug!("actor store closed");
        Ok(())
    }

    /// Runs `f` against the open store on the blocking pool.
    async fn run<T, F>(&self, operation: &'static str, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut S) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        blocking(operation, move || {
            let mut guard = store.lock().map_err(|_| StorageError::Poisoned)?;
            let storage = guard.as_mut().ok_or(StorageError::Closed)?;
            f(storage)
        })
        .await
    }
}

/// Runs `f` on tokio's blocking pool. Any failure, including a panicked
/// task, is logged before it is returned.
async fn blocking<T, F>(operation: &'static str, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::from(StorageError::from(e)))
        .and_then(|r| r);

    if let Err(e) = &result {
        tracing::error!(operation, error = %e, "storage operation failed");
    }
    result
}
