//! # actor-store
//!
//! A local keyed store of actor records with sort-on-read.
//!
//! Actors (an id, a name and an ordered list of category tags) live in a
//! single `SQLite`-backed collection that is created and seeded on first
//! use. The [`ActorService`] facade exposes the three operations a front
//! end needs (fetch sorted, update, delete) as async calls that resolve
//! with typed results.
//!
//! ## Features
//!
//! - **Keyed collection**: one versioned table, seeded exactly once
//! - **Sort-on-read**: stable, locale-aware ordering by name or categories
//! - **Async facade**: one shared store handle with explicit open/close
//! - **CLI**: list, show, update and delete from the terminal

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod error;
pub mod query;
pub mod service;
pub mod storage;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use crate::core::{Actor, seed_actors};

pub use query::{SortField, SortOrder, SortSpec, locale_compare, sort_actors};

pub use service::ActorService;

pub use storage::{DEFAULT_DB_PATH, SqliteStorage, Storage, StorageStats};

pub use cli::{Cli, Commands, OutputFormat};
