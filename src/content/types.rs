//! Record types for the static content files.
//!
//! Field names follow the JSON files (camelCase). Every record is read-only
//! once decoded; nothing in the crate mutates content after loading.

use serde::{Deserialize, Serialize};

use crate::content::sections::SectionEntry;

/// Anything addressable by a URL slug.
pub trait Slugged {
    fn slug(&self) -> &str;
}

// ============================================================================
// Render context values
// ============================================================================

/// Entrance animation used by every section of a page.
///
/// Only `"fade-up"` is named in the content files; any other value selects
/// the scale-in variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnimationStyle {
    #[default]
    FadeUp,
    Scale,
}

impl AnimationStyle {
    /// Utility class applied while a section is still pending reveal.
    pub fn pending_class(&self) -> &'static str {
        match self {
            AnimationStyle::FadeUp => "translate-y-10",
            AnimationStyle::Scale => "scale-95",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationStyle::FadeUp => "fade-up",
            AnimationStyle::Scale => "scale",
        }
    }
}

impl From<String> for AnimationStyle {
    fn from(value: String) -> Self {
        if value == "fade-up" {
            AnimationStyle::FadeUp
        } else {
            AnimationStyle::Scale
        }
    }
}

impl From<AnimationStyle> for String {
    fn from(value: AnimationStyle) -> Self {
        value.as_str().to_string()
    }
}

/// Four-slot palette. Values are utility colour names such as `red-700`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "red-700".to_string(),
            accent: "red-600".to_string(),
            background: "white".to_string(),
            text: "black".to_string(),
        }
    }
}

// ============================================================================
// Service records
// ============================================================================

/// One service page (academy, payroll, intelligence, talent acquisition).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub seo_title: String,
    #[serde(default)]
    pub seo_description: String,
    #[serde(default)]
    pub estimated_read_time: Option<u32>,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub animation_style: AnimationStyle,
    #[serde(default)]
    pub theme_colors: ThemeColors,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

impl Slugged for ServiceRecord {
    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Publications
// ============================================================================

/// Blog post from `publications.json` (a root-level array).
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: u64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Slugged for Post {
    fn slug(&self) -> &str {
        &self.slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_style_from_string() {
        assert_eq!(AnimationStyle::from("fade-up".to_string()), AnimationStyle::FadeUp);
        assert_eq!(AnimationStyle::from("scale-in".to_string()), AnimationStyle::Scale);
        assert_eq!(AnimationStyle::from(String::new()), AnimationStyle::Scale);
    }

    #[test]
    fn test_record_defaults() {
        let record: ServiceRecord = serde_json::from_str(
            r#"{"slug": "workshops", "title": "Workshops"}"#,
        )
        .unwrap();

        assert_eq!(record.slug(), "workshops");
        assert_eq!(record.animation_style, AnimationStyle::FadeUp);
        assert_eq!(record.theme_colors, ThemeColors::default());
        assert!(record.sections.is_empty());
        assert!(record.estimated_read_time.is_none());
    }

    #[test]
    fn test_record_camel_case_fields() {
        let record: ServiceRecord = serde_json::from_str(
            r#"{
                "slug": "payroll-processing",
                "title": "Payroll Processing",
                "seoTitle": "Payroll Processing | Venovox",
                "seoDescription": "Accurate payroll.",
                "estimatedReadTime": 6,
                "lastUpdated": "2024-03-15",
                "animationStyle": "scale-up",
                "themeColors": {"primary": "blue-700", "accent": "blue-500", "background": "gray-50", "text": "gray-900"}
            }"#,
        )
        .unwrap();

        assert_eq!(record.seo_title, "Payroll Processing | Venovox");
        assert_eq!(record.estimated_read_time, Some(6));
        assert_eq!(record.animation_style, AnimationStyle::Scale);
        assert_eq!(record.theme_colors.background, "gray-50");
    }
}
