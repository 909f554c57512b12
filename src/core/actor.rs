//! Actor records.
//!
//! An actor is a named record tagged with an ordered list of categories.
//! The `id` is the primary key of the keyed collection and never changes
//! once assigned; only `name` and `categories` are mutable.

use serde::{Deserialize, Serialize};

/// Separator used when rendering a category list as one string.
///
/// Sorting by categories compares this rendering, not the list itself.
pub const CATEGORY_SEPARATOR: &str = ", ";

/// A single actor record.
///
/// # Examples
///
/// ```
/// use actor_store::core::Actor;
///
/// let actor = Actor::new(4, "Max Payne", ["TPS", "Noir"]);
/// assert_eq!(actor.categories_label(), "TPS, Noir");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier and primary key.
    pub id: i64,

    /// Free-text display name.
    pub name: String,

    /// Ordered category tags. Duplicates are allowed.
    pub categories: Vec<String>,
}

impl Actor {
    /// Creates an actor from an id, a name and any iterable of tags.
    #[must_use]
    pub fn new<N, I, S>(id: i64, name: N, categories: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders the category list joined with [`CATEGORY_SEPARATOR`].
    #[must_use]
    pub fn categories_label(&self) -> String {
        self.categories.join(CATEGORY_SEPARATOR)
    }

    /// Returns a copy of `self` with the mutable fields taken from `other`.
    ///
    /// The id is always kept from `self`.
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        Self {
            id: self.id,
            name: other.name.clone(),
            categories: other.categories.clone(),
        }
    }
}

/// Records inserted when the collection is created for the first time.
#[must_use]
pub fn seed_actors() -> Vec<Actor> {
    vec![
        Actor::new(1, "Alan Wake", ["TPS", "Adventure", "Horror"]),
        Actor::new(2, "Jason Bourne", ["Movie", "Thriller", "Spy"]),
        Actor::new(3, "Bruce Wayne", ["Batman", "Philanthropist", "Orphan"]),
    ]
}
