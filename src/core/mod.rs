//! Core domain model for actor-store.
//!
//! The single record type managed by the store and the fixed set of
//! records seeded when the collection is first created. These are pure
//! domain types with no I/O dependencies.

pub mod actor;

pub use actor::{Actor, CATEGORY_SEPARATOR, seed_actors};
