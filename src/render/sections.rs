//! Section Renderers
//!
//! One askama template per section variant. Each renderer sees the shared
//! frame (id, heading, subheading, content, pending reveal class, palette)
//! and the slice of payload it needs; nothing else.
//!
//! Public API (consumed by dispatcher.rs):
//! - render_section(section, ctx) -> askama::Result<String>

use askama::Template;

use crate::content::sections::{
    CaseStudy, ChecklistItem, CtaButton, DataPoint, Faq, Feature, Insight, Section, SectionBody, Step,
};
use crate::content::ThemeColors;
use crate::render::context::RenderContext;
use crate::render::text::{split_paragraphs, ImagePlacement};
use crate::ui_state::{AccordionMode, AccordionState};

/// Placeholder used when an image-with-text section names no image.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Per-item stagger for feature cards.
const FEATURE_STAGGER_MS: usize = 100;
/// Per-item stagger for timeline steps.
const STEP_STAGGER_MS: usize = 150;

/// FAQ sections open one answer at a time.
const FAQ_ACCORDION: AccordionMode = AccordionMode::Single;

/// Fields every section template shares.
pub struct SectionFrame<'a> {
    pub id: &'a str,
    pub heading: &'a str,
    pub subheading: Option<&'a str>,
    pub content: Option<&'a str>,
    pub pending_class: &'static str,
    pub theme: &'a ThemeColors,
}

impl<'a> SectionFrame<'a> {
    fn new(section: &'a Section, ctx: &'a RenderContext) -> Self {
        Self {
            id: &section.id,
            heading: &section.heading,
            subheading: section.subheading.as_deref().filter(|s| !s.is_empty()),
            content: section.content.as_deref().filter(|s| !s.is_empty()),
            pending_class: ctx.animation_style.pending_class(),
            theme: &ctx.theme_colors,
        }
    }
}

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(path = "sections/hero.html")]
pub struct HeroTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub cta: Option<&'a CtaButton>,
}

#[derive(Template)]
#[template(path = "sections/text.html")]
pub struct TextTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub paragraphs: Vec<&'a str>,
}

pub struct FeatureCard<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub delay_ms: usize,
}

#[derive(Template)]
#[template(path = "sections/features.html")]
pub struct FeaturesTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub cards: Vec<FeatureCard<'a>>,
}

pub struct TimelineStep<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub delay_ms: usize,
    pub on_right: bool,
}

#[derive(Template)]
#[template(path = "sections/infographic.html")]
pub struct InfographicTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub steps: Vec<TimelineStep<'a>>,
    pub data_points: &'a [DataPoint],
}

#[derive(Template)]
#[template(path = "sections/case_studies.html")]
pub struct CaseStudiesTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub cases: &'a [CaseStudy],
}

#[derive(Template)]
#[template(path = "sections/checklist.html")]
pub struct ChecklistTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub items: &'a [ChecklistItem],
}

#[derive(Template)]
#[template(path = "sections/image_with_text.html")]
pub struct ImageWithTextTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub paragraphs: Vec<&'a str>,
    pub image_src: &'a str,
    pub image_first: bool,
}

#[derive(Template)]
#[template(path = "sections/comparison_table.html")]
pub struct ComparisonTableTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub headers: &'a [String],
    pub rows: Vec<Vec<&'a str>>,
}

#[derive(Template)]
#[template(path = "sections/expert_insights.html")]
pub struct ExpertInsightsTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub insights: &'a [Insight],
}

pub struct FaqItem<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub open: bool,
}

#[derive(Template)]
#[template(path = "sections/faq.html")]
pub struct FaqTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub items: Vec<FaqItem<'a>>,
    pub accordion: &'static str,
}

#[derive(Template)]
#[template(path = "sections/cta.html")]
pub struct CtaTemplate<'a> {
    pub frame: SectionFrame<'a>,
    pub cta: Option<&'a CtaButton>,
}

// ============================================================================
// Registry
// ============================================================================

/// Render one decoded section. The match is the renderer registry.
pub fn render_section(section: &Section, ctx: &RenderContext) -> askama::Result<String> {
    let frame = SectionFrame::new(section, ctx);

    match &section.body {
        SectionBody::Hero { cta_button } => HeroTemplate {
            frame,
            cta: cta_button.as_ref(),
        }
        .render(),

        SectionBody::Text => TextTemplate {
            paragraphs: split_paragraphs(section.content.as_deref()),
            frame,
        }
        .render(),

        SectionBody::Features { features } => FeaturesTemplate {
            frame,
            cards: feature_cards(features),
        }
        .render(),

        SectionBody::Infographic { steps, data_points } => InfographicTemplate {
            frame,
            steps: timeline_steps(steps),
            data_points,
        }
        .render(),

        SectionBody::CaseStudies { cases } => CaseStudiesTemplate { frame, cases }.render(),

        SectionBody::Checklist { items } => ChecklistTemplate { frame, items }.render(),

        SectionBody::ImageWithText { image_position, image } => ImageWithTextTemplate {
            paragraphs: split_paragraphs(section.content.as_deref()),
            image_src: image.as_deref().unwrap_or(PLACEHOLDER_IMAGE),
            image_first: ImagePlacement::from_position(image_position.as_deref()).image_first(),
            frame,
        }
        .render(),

        SectionBody::ComparisonTable { table_headers, table_rows } => ComparisonTableTemplate {
            frame,
            headers: table_headers,
            rows: table_rows
                .iter()
                .map(|row| {
                    table_headers
                        .iter()
                        .map(|header| row.get(header).map(String::as_str).unwrap_or(""))
                        .collect()
                })
                .collect(),
        }
        .render(),

        SectionBody::ExpertInsights { insights } => ExpertInsightsTemplate { frame, insights }.render(),

        SectionBody::Faq { faqs } => FaqTemplate {
            frame,
            items: faq_items(faqs, &AccordionState::new(FAQ_ACCORDION, faqs.len())),
            accordion: FAQ_ACCORDION.as_str(),
        }
        .render(),

        SectionBody::Cta { cta_button } => CtaTemplate {
            frame,
            cta: cta_button.as_ref(),
        }
        .render(),
    }
}

fn feature_cards(features: &[Feature]) -> Vec<FeatureCard<'_>> {
    features
        .iter()
        .enumerate()
        .map(|(idx, feature)| FeatureCard {
            title: &feature.title,
            description: &feature.description,
            delay_ms: idx * FEATURE_STAGGER_MS,
        })
        .collect()
}

/// Initial open/closed markup follows the accordion state.
fn faq_items<'a>(faqs: &'a [Faq], state: &AccordionState) -> Vec<FaqItem<'a>> {
    faqs.iter()
        .enumerate()
        .map(|(idx, faq)| FaqItem {
            question: &faq.question,
            answer: &faq.answer,
            open: state.is_open(idx),
        })
        .collect()
}

fn timeline_steps(steps: &[Step]) -> Vec<TimelineStep<'_>> {
    steps
        .iter()
        .enumerate()
        .map(|(idx, step)| TimelineStep {
            title: &step.title,
            description: &step.description,
            delay_ms: idx * STEP_STAGGER_MS,
            on_right: idx % 2 == 1,
        })
        .collect()
}
