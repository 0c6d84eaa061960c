//! Page metadata (title, description, Open Graph) derived from records.

use serde::Serialize;

use crate::content::{Category, Post, ServiceRecord};

pub const SITE_NAME: &str = "Venovox";
pub const SERVICE_NOT_FOUND_TITLE: &str = "Service Not Found";
pub const POST_NOT_FOUND_TITLE: &str = "Publication Not Found";
pub const PAGE_NOT_FOUND_TITLE: &str = "Page Not Found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub published_time: Option<String>,
    pub twitter_card: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub open_graph: Option<OpenGraph>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            open_graph: None,
        }
    }

    /// Title and description from the record's SEO fields, falling back to
    /// the page title when `seoTitle` is blank.
    pub fn for_service(record: &ServiceRecord) -> Self {
        let title = if record.seo_title.is_empty() {
            record.title.clone()
        } else {
            record.seo_title.clone()
        };
        let description = record.seo_description.clone();
        let published_time = Some(record.last_updated.clone()).filter(|s| !s.is_empty());

        Self {
            open_graph: Some(OpenGraph {
                kind: "article".to_string(),
                title: title.clone(),
                description: description.clone(),
                published_time,
                twitter_card: "summary_large_image".to_string(),
            }),
            title,
            description,
        }
    }

    pub fn service_not_found(category: Category) -> Self {
        let description = match category.not_found_noun() {
            Some(noun) => format!("The requested {} service could not be found.", noun),
            None => "The requested service could not be found.".to_string(),
        };
        Self::new(SERVICE_NOT_FOUND_TITLE, description)
    }

    pub fn for_post(post: &Post) -> Self {
        let published_time = Some(post.date.clone()).filter(|s| !s.is_empty());
        Self {
            open_graph: Some(OpenGraph {
                kind: "article".to_string(),
                title: post.title.clone(),
                description: post.excerpt.clone(),
                published_time,
                twitter_card: "summary_large_image".to_string(),
            }),
            title: post.title.clone(),
            description: post.excerpt.clone(),
        }
    }

    pub fn post_not_found() -> Self {
        Self::new(POST_NOT_FOUND_TITLE, "The requested publication could not be found.")
    }

    pub fn page_not_found() -> Self {
        Self::new(PAGE_NOT_FOUND_TITLE, "The requested page could not be found.")
    }

    /// `<title>` text, suffixed with the site name.
    pub fn document_title(&self) -> String {
        if self.title.contains(SITE_NAME) {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, SITE_NAME)
        }
    }
}
