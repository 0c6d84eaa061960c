//! Content layer: static JSON collections, slug lookup, section model.
//!
//! ## Collections
//! - academy, payroll, intelligence, talent acquisition (service records)
//! - publications (blog posts)
//!
//! Public API:
//! - `ContentStore::services(category)` / `ContentStore::posts()`
//! - `resolver::find(collection, slug)`

pub mod category;
pub mod resolver;
pub mod sections;
pub mod store;
pub mod types;

pub use category::{Category, CollectionSource, PageLayout, PUBLICATIONS};
pub use resolver::{find, slugs};
pub use sections::{Section, SectionBody, SectionEntry, SectionKind, UnrecognizedSection};
pub use store::{ContentError, ContentStore};
pub use types::{AnimationStyle, Post, ServiceRecord, Slugged, ThemeColors};
