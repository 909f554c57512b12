//! Locale-aware string comparison.
//!
//! Uses the Unicode root collation (CLDR `und`) at tertiary strength:
//! base letters decide first, so accented letters sort next to their
//! unaccented forms, then accents, then case with lowercase first.
//! Punctuation and spaces are non-ignorable and sort before digits and
//! letters.

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Root collator, built on first use.
fn root_collator() -> Option<&'static CollatorBorrowed<'static>> {
    static ROOT: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();
    ROOT.get_or_init(|| {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Tertiary);
        Collator::try_new(CollatorPreferences::default(), options)
            .inspect_err(|e| tracing::error!(error = %e, "root collation data unavailable"))
            .ok()
    })
    .as_ref()
}

/// Compares two strings the way a person reading a sorted list expects.
///
/// Strings that are canonically equivalent compare as `Equal`; a stable
/// sort then keeps their existing order.
///
/// # Examples
///
/// ```
/// use actor_store::query::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("a", "A"), Ordering::Less);
/// assert_eq!(locale_compare("Émile", "Zoe"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    match root_collator() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}
