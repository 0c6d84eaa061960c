//! Section rendering: context, renderer catalog, dispatcher.
//!
//! ## Catalog
//! hero, text, features, infographic, caseStudies, checklist, imageWithText,
//! comparisonTable, expertInsights, faq, cta

pub mod context;
pub mod dispatcher;
pub mod sections;
pub mod text;

pub use context::RenderContext;
pub use dispatcher::{render_sections, RenderedSection};
pub use sections::render_section;
pub use text::{split_paragraphs, ImagePlacement};
