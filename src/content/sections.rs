//! Section model: common fields plus a payload discriminated by `type`.
//!
//! Decoding never fails at the section level. A section whose tag is not in
//! the catalog, or whose payload does not match its tag, is kept as
//! [`SectionEntry::Unrecognized`] so the dispatcher can skip it and log it
//! without losing the rest of the page.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of a record's `sections` array, as read from disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SectionEntry {
    Known(Section),
    Unrecognized(UnrecognizedSection),
    /// Not even a JSON object.
    Invalid(IgnoredAny),
}

impl SectionEntry {
    pub fn as_known(&self) -> Option<&Section> {
        match self {
            SectionEntry::Known(section) => Some(section),
            _ => None,
        }
    }
}

/// Leftovers of a section that could not be decoded into the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct UnrecognizedSection {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: Option<String>,
}

impl UnrecognizedSection {
    /// True when the tag is in the catalog but the payload was malformed.
    pub fn is_malformed_known(&self) -> bool {
        SectionKind::from_tag(&self.kind).is_some()
    }
}

/// A decoded section.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(default)]
    pub subheading: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(flatten)]
    pub body: SectionBody,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.body.kind()
    }
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CtaButton {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Timeline step (academy infographics).
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Timeline stage with a headline metric (service infographics).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timeframe: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_metric: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseStudy {
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub challenge: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub solution: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub complexity: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trend: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub impact: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expert_view: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Faq {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
}

/// Tag-specific payload. Optional arrays default to empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SectionBody {
    Hero {
        #[serde(default, rename = "ctaButton")]
        cta_button: Option<CtaButton>,
    },
    Text,
    Features {
        #[serde(default, deserialize_with = "null_as_default")]
        features: Vec<Feature>,
    },
    Infographic {
        #[serde(default, deserialize_with = "null_as_default")]
        steps: Vec<Step>,
        #[serde(default, rename = "dataPoints", deserialize_with = "null_as_default")]
        data_points: Vec<DataPoint>,
    },
    CaseStudies {
        #[serde(default, deserialize_with = "null_as_default")]
        cases: Vec<CaseStudy>,
    },
    Checklist {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<ChecklistItem>,
    },
    ImageWithText {
        #[serde(default, rename = "imagePosition")]
        image_position: Option<String>,
        #[serde(default)]
        image: Option<String>,
    },
    ComparisonTable {
        #[serde(default, rename = "tableHeaders", deserialize_with = "null_as_default")]
        table_headers: Vec<String>,
        #[serde(default, rename = "tableRows", deserialize_with = "null_as_default")]
        table_rows: Vec<BTreeMap<String, String>>,
    },
    ExpertInsights {
        #[serde(default, deserialize_with = "null_as_default")]
        insights: Vec<Insight>,
    },
    Faq {
        #[serde(default, deserialize_with = "null_as_default")]
        faqs: Vec<Faq>,
    },
    Cta {
        #[serde(default, rename = "ctaButton")]
        cta_button: Option<CtaButton>,
    },
}

impl SectionBody {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBody::Hero { .. } => SectionKind::Hero,
            SectionBody::Text => SectionKind::Text,
            SectionBody::Features { .. } => SectionKind::Features,
            SectionBody::Infographic { .. } => SectionKind::Infographic,
            SectionBody::CaseStudies { .. } => SectionKind::CaseStudies,
            SectionBody::Checklist { .. } => SectionKind::Checklist,
            SectionBody::ImageWithText { .. } => SectionKind::ImageWithText,
            SectionBody::ComparisonTable { .. } => SectionKind::ComparisonTable,
            SectionBody::ExpertInsights { .. } => SectionKind::ExpertInsights,
            SectionBody::Faq { .. } => SectionKind::Faq,
            SectionBody::Cta { .. } => SectionKind::Cta,
        }
    }
}

/// Catalog of section tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Text,
    Features,
    Infographic,
    CaseStudies,
    Checklist,
    ImageWithText,
    ComparisonTable,
    ExpertInsights,
    Faq,
    Cta,
}

impl SectionKind {
    pub const ALL: [SectionKind; 11] = [
        SectionKind::Hero,
        SectionKind::Text,
        SectionKind::Features,
        SectionKind::Infographic,
        SectionKind::CaseStudies,
        SectionKind::Checklist,
        SectionKind::ImageWithText,
        SectionKind::ComparisonTable,
        SectionKind::ExpertInsights,
        SectionKind::Faq,
        SectionKind::Cta,
    ];

    /// Tag as written in the content files.
    pub fn tag(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Text => "text",
            SectionKind::Features => "features",
            SectionKind::Infographic => "infographic",
            SectionKind::CaseStudies => "caseStudies",
            SectionKind::Checklist => "checklist",
            SectionKind::ImageWithText => "imageWithText",
            SectionKind::ComparisonTable => "comparisonTable",
            SectionKind::ExpertInsights => "expertInsights",
            SectionKind::Faq => "faq",
            SectionKind::Cta => "cta",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}
