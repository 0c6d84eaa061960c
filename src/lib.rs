//! Venovox marketing site
//!
//! Content-driven pages for the HR services catalogue: every page is a record
//! in a JSON content file, looked up by slug and rendered section by section.
//!
//! - `content/`: record types, section model, slug resolution, file loading
//! - `render/`: one renderer per section kind plus the dispatcher
//! - `reveal`: scroll-reveal state machine and its client script
//! - `ui_state`: header menu and FAQ accordion state
//! - `seo`: page metadata and not-found fallbacks
//! - `web/`: page templates, page resolution and HTTP handlers
//! - `export`: static HTML export of every page

pub mod config;
pub mod content;
pub mod dates;
pub mod export;
pub mod render;
pub mod reveal;
pub mod seo;
pub mod ui_state;
pub mod web;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::SiteConfig;
pub use content::{Category, ContentError, ContentStore, Post, ServiceRecord};
pub use export::{export_site, ExportError, ExportReport};
pub use render::{render_sections, RenderContext, RenderedSection};
pub use reveal::RevealController;
pub use seo::PageMeta;
pub use web::site::Page;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
