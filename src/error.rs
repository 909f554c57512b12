//! Error types for actor-store operations.
//!
//! This module provides the error hierarchy using `thiserror` for the
//! local store, the query layer, and CLI commands. Every facade operation
//! returns one of these instead of only logging the failure.

use thiserror::Error;

/// Result type alias for actor-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage-related errors (database operations).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Sort parameter errors.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Storage-specific errors for the keyed actor collection.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database query or statement error.
    #[error("database error: {0}")]
    Database(String),

    /// The database file could not be opened.
    #[error("failed to open database: {path}: {reason}")]
    Open {
        /// Path that was being opened.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Storage not initialized (init command not run).
    #[error("actor store not initialized. Run: actor-store init")]
    NotInitialized,

    /// No actor with the given id.
    #[error("actor not found: {id}")]
    ActorNotFound {
        /// Id that was looked up.
        id: i64,
    },

    /// The database was written by a newer schema.
    #[error("unsupported schema version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version recorded in the database.
        found: u32,
        /// Highest version this build understands.
        supported: u32,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Transaction error.
    #[error("transaction error: {0}")]
    Transaction(String),

    /// The store handle was closed.
    #[error("actor store is closed")]
    Closed,

    /// A previous operation panicked while holding the store lock.
    #[error("actor store lock poisoned")]
    Poisoned,

    /// The blocking task running a storage operation failed.
    #[error("storage task failed: {0}")]
    Task(String),
}

/// Errors raised while parsing sort parameters.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// Unknown sort field.
    #[error("unknown sort field: {0} (expected name or categories)")]
    UnknownField(String),

    /// Unknown sort order.
    #[error("unknown sort order: {0} (expected asc or desc)")]
    UnknownOrder(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Command(CommandError::ExecutionFailed(err.to_string()))
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::NotInitialized;
        assert_eq!(
            err.to_string(),
            "actor store not initialized. Run: actor-store init"
        );

        let err = StorageError::ActorNotFound { id: 7 };
        assert_eq!(err.to_string(), "actor not found: 7");

        let err = StorageError::UnsupportedVersion {
            found: 3,
            supported: 1,
        };
        assert_eq!(
            err.to_string(),
            "unsupported schema version 3 (supported: 1)"
        );
    }

    #[test]
    fn test_query_error_display() {
        let err = QueryError::UnknownField("age".to_string());
        assert!(err.to_string().contains("age"));

        let err = QueryError::UnknownOrder("sideways".to_string());
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_error_from_storage() {
        let err: Error = StorageError::Closed.into();
        assert!(matches!(err, Error::Storage(StorageError::Closed)));
        assert_eq!(err.to_string(), "storage error: actor store is closed");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        assert!(matches!(
            err,
            Error::Command(CommandError::ExecutionFailed(_))
        ));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let err: Error = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(err, Error::Storage(StorageError::Database(_))));

        let err: StorageError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(err, StorageError::Database(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: StorageError = json_err.into();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn test_command_error_variants() {
        let err = CommandError::InvalidArgument("--bad".to_string());
        assert!(err.to_string().contains("invalid argument"));

        let err = CommandError::ExecutionFailed("disk full".to_string());
        assert_eq!(err.to_string(), "command execution failed: disk full");
    }
}
