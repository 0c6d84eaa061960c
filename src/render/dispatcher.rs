//! Section Dispatcher
//!
//! Walks a record's sections in order and hands each to its renderer.
//! Entries with an unknown tag (or a payload that did not decode) are left
//! out and logged; the rest of the page still renders. New section types can
//! therefore ship in content before the site knows how to draw them.

use crate::content::sections::{SectionEntry, SectionKind};
use crate::render::context::RenderContext;
use crate::render::sections::render_section;

/// One rendered section, keyed by the section id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub id: String,
    pub kind: SectionKind,
    pub html: String,
}

/// Render every recognised section in order.
pub fn render_sections(sections: &[SectionEntry], ctx: &RenderContext) -> Vec<RenderedSection> {
    let mut rendered = Vec::with_capacity(sections.len());

    for (idx, entry) in sections.iter().enumerate() {
        let section = match entry {
            SectionEntry::Known(section) => section,
            SectionEntry::Unrecognized(raw) => {
                let id = raw.id.as_deref().unwrap_or("<no id>");
                if raw.is_malformed_known() {
                    tracing::warn!("Section {} ({}) has a malformed payload, skipping", id, raw.kind);
                } else {
                    tracing::warn!("No renderer for section type: {} (id {}), skipping", raw.kind, id);
                }
                continue;
            }
            SectionEntry::Invalid(_) => {
                tracing::warn!("Section #{} is not an object, skipping", idx);
                continue;
            }
        };

        match render_section(section, ctx) {
            Ok(html) => rendered.push(RenderedSection {
                id: section.id.clone(),
                kind: section.kind(),
                html,
            }),
            Err(e) => {
                tracing::warn!("Failed to render section {} ({}): {}", section.id, section.kind().tag(), e);
            }
        }
    }

    rendered
}
