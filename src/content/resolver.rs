//! Slug lookup over a loaded collection.

use crate::content::types::Slugged;

/// First record whose slug equals `slug` exactly (case-sensitive).
///
/// Linear scan in file order; uniqueness of slugs is up to the content
/// files. An empty collection (including one that failed to load) always
/// yields `None`.
pub fn find<'a, R: Slugged>(collection: &'a [R], slug: &str) -> Option<&'a R> {
    collection.iter().find(|record| record.slug() == slug)
}

/// Slugs in file order, for static generation.
pub fn slugs<R: Slugged>(collection: &[R]) -> Vec<&str> {
    collection.iter().map(Slugged::slug).collect()
}
