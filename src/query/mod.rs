//! Query and sort layer.
//!
//! Reads are full scans in key order; ordering is applied afterwards on
//! the client side. The secondary indexes declared by the schema are not
//! used for ordering.

pub mod collate;

pub use collate::locale_compare;

use crate::core::Actor;
use crate::error::QueryError;
use serde::Serialize;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field an actor list can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Order by display name.
    #[default]
    Name,
    /// Order by the `", "`-joined category list.
    Categories,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// A sort field plus direction. Defaults to name, ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SortSpec {
    /// Field to compare.
    pub field: SortField,
    /// Direction to apply.
    pub order: SortOrder,
}

impl SortSpec {
    /// Creates a sort specification.
    #[must_use]
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Compares two actors under this specification.
    #[must_use]
    pub fn compare(&self, a: &Actor, b: &Actor) -> Ordering {
        self.compare_keys(&self.field.key(a), &self.field.key(b))
    }

    /// Compares two already extracted sort keys under this direction.
    fn compare_keys(self, a: &str, b: &str) -> Ordering {
        // Descending swaps the operands instead of reversing the result,
        // so equal keys keep their original relative order either way.
        match self.order {
            SortOrder::Ascending => locale_compare(a, b),
            SortOrder::Descending => locale_compare(b, a),
        }
    }
}

impl SortField {
    /// Returns the string an actor is ordered by for this field.
    #[must_use]
    pub fn key(self, actor: &Actor) -> Cow<'_, str> {
        match self {
            Self::Name => Cow::Borrowed(actor.name.as_str()),
            Self::Categories => Cow::Owned(actor.categories_label()),
        }
    }
}

/// Sorts actors in place. The sort is stable.
///
/// # Examples
///
/// ```
/// use actor_store::core::Actor;
/// use actor_store::query::{SortSpec, sort_actors};
///
/// let mut actors = vec![
///     Actor::new(3, "Bruce Wayne", ["Batman"]),
///     Actor::new(1, "Alan Wake", ["TPS"]),
/// ];
/// sort_actors(&mut actors, SortSpec::default());
/// assert_eq!(actors[0].name, "Alan Wake");
/// ```
pub fn sort_actors(actors: &mut [Actor], spec: SortSpec) {
    // Extract each key once rather than on every comparison.
    let mut keyed: Vec<(String, Actor)> = actors
        .iter()
        .map(|a| (spec.field.key(a).into_owned(), a.clone()))
        .collect();
    keyed.sort_by(|(ka, _), (kb, _)| spec.compare_keys(ka, kb));
    for (slot, (_, actor)) in actors.iter_mut().zip(keyed) {
        *slot = actor;
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "n" => Ok(Self::Name),
            "categories" | "category" | "c" => Ok(Self::Categories),
            _ => Err(QueryError::UnknownField(s.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(QueryError::UnknownOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Categories => f.write_str("categories"),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("asc"),
            Self::Descending => f.write_str("desc"),
        }
    }
}
