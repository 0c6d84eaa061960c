//! Page templates (askama) and the builders that fill them.
//!
//! Every page extends `base.html`, which carries the shared header, the
//! footer CTA and the inline client scripts.

use askama::Template;

use crate::content::{Category, ContentStore, PageLayout, Post, ServiceRecord};
use crate::dates::{format_long_date, format_post_date};
use crate::render::{render_sections, split_paragraphs, RenderContext, RenderedSection};
use crate::reveal;
use crate::seo::PageMeta;
use crate::ui_state::{self, is_active, NavState};

pub const PUBLICATION_PATH: &str = "/publication";

// ============================================================================
// Shared chrome
// ============================================================================

pub struct NavLink {
    pub label: String,
    pub href: String,
    pub active: bool,
    /// Dropdown entries; empty for plain links.
    pub children: Vec<NavLink>,
}

impl NavLink {
    fn new(label: impl Into<String>, href: String, current_path: &str) -> Self {
        Self {
            label: label.into(),
            active: is_active(&href, current_path),
            href,
            children: Vec::new(),
        }
    }
}

/// Service titles per category, shown as header dropdowns.
#[derive(Debug, Clone, Default)]
pub struct SiteMenu {
    groups: Vec<(Category, Vec<(String, String)>)>,
}

impl SiteMenu {
    /// Read every category once.
    pub fn load(store: &ContentStore) -> Self {
        let mut menu = Self::default();
        for category in Category::ALL {
            menu.add(category, &store.services(category));
        }
        menu
    }

    pub fn add(&mut self, category: Category, records: &[ServiceRecord]) {
        let items = records
            .iter()
            .map(|record| (record.slug.clone(), record.title.clone()))
            .collect();
        self.groups.push((category, items));
    }

    fn items(&self, category: Category) -> &[(String, String)] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }
}

/// Header links, initial header state and inline scripts shared by every page.
pub struct Chrome {
    pub nav: Vec<NavLink>,
    pub state: NavState,
    pub reveal_script: String,
    pub ui_script: String,
}

impl Chrome {
    pub fn new(current_path: &str, menu: &SiteMenu) -> Self {
        let mut nav = vec![NavLink::new("Home", "/".to_string(), current_path)];
        for category in Category::ALL {
            let href = format!("/{}", category.segment());
            let mut link = NavLink::new(category.display_name(), href.clone(), current_path);
            link.children = menu
                .items(category)
                .iter()
                .map(|(slug, title)| NavLink::new(title.as_str(), format!("{}/{}", href, slug), current_path))
                .collect();
            nav.push(link);
        }
        nav.push(NavLink::new("Publication", PUBLICATION_PATH.to_string(), current_path));

        Self {
            nav,
            state: NavState::new(),
            reveal_script: reveal::client_script(),
            ui_script: ui_state::client_script(),
        }
    }

    pub fn dropdown_open(&self, name: &str) -> bool {
        self.state.open_dropdown() == Some(name)
    }
}

pub struct IndexEntry<'a> {
    pub href: String,
    pub title: &'a str,
    pub summary: &'a str,
}

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub meta: PageMeta,
    pub chrome: Chrome,
    pub categories: Vec<NavLink>,
}

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate<'a> {
    pub meta: PageMeta,
    pub chrome: Chrome,
    pub heading: &'a str,
    pub entries: Vec<IndexEntry<'a>>,
}

#[derive(Template)]
#[template(path = "pages/service.html")]
pub struct ServiceTemplate<'a> {
    pub meta: PageMeta,
    pub chrome: Chrome,
    pub title: &'a str,
    pub article: bool,
    pub last_updated: String,
    pub read_time: Option<u32>,
    pub wrapper_class: String,
    pub sections: Vec<RenderedSection>,
}

#[derive(Template)]
#[template(path = "pages/post.html")]
pub struct PostTemplate<'a> {
    pub meta: PageMeta,
    pub chrome: Chrome,
    pub post: &'a Post,
    pub date: String,
    pub paragraphs: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub meta: PageMeta,
    pub chrome: Chrome,
    pub back_href: String,
    pub back_label: String,
}

// ============================================================================
// Builders
// ============================================================================

pub fn home_page(menu: &SiteMenu) -> askama::Result<String> {
    let categories = Category::ALL
        .into_iter()
        .map(|category| NavLink::new(category.display_name(), format!("/{}", category.segment()), ""))
        .collect();

    HomeTemplate {
        meta: PageMeta::new("HR Services, Payroll, Intelligence & Academy", "HR services for growing businesses."),
        chrome: Chrome::new("/", menu),
        categories,
    }
    .render()
}

pub fn category_index(category: Category, records: &[ServiceRecord], menu: &SiteMenu) -> askama::Result<String> {
    let path = format!("/{}", category.segment());
    let entries = records
        .iter()
        .map(|record| IndexEntry {
            href: format!("{}/{}", path, record.slug),
            title: &record.title,
            summary: &record.seo_description,
        })
        .collect();

    IndexTemplate {
        meta: PageMeta::new(category.display_name(), format!("{} services", category.display_name())),
        chrome: Chrome::new(&path, menu),
        heading: category.display_name(),
        entries,
    }
    .render()
}

pub fn publication_index(posts: &[Post], menu: &SiteMenu) -> askama::Result<String> {
    let entries = posts
        .iter()
        .map(|post| IndexEntry {
            href: format!("{}/{}", PUBLICATION_PATH, post.slug),
            title: &post.title,
            summary: &post.excerpt,
        })
        .collect();

    IndexTemplate {
        meta: PageMeta::new("Publication", "Articles and insights."),
        chrome: Chrome::new(PUBLICATION_PATH, menu),
        heading: "Publication",
        entries,
    }
    .render()
}

pub fn service_page(category: Category, record: &ServiceRecord, menu: &SiteMenu) -> askama::Result<String> {
    let ctx = RenderContext::for_record(record);
    let sections = render_sections(&record.sections, &ctx);

    let wrapper_class = match category.layout() {
        PageLayout::ThemedLanding => format!(
            "bg-{} text-{}",
            record.theme_colors.background, record.theme_colors.text
        ),
        PageLayout::Article | PageLayout::Landing => "bg-white text-black".to_string(),
    };

    ServiceTemplate {
        meta: PageMeta::for_service(record),
        chrome: Chrome::new(&format!("/{}/{}", category.segment(), record.slug), menu),
        title: &record.title,
        article: category.layout() == PageLayout::Article,
        last_updated: format_long_date(&record.last_updated),
        read_time: record.estimated_read_time,
        wrapper_class,
        sections,
    }
    .render()
}

pub fn post_page(post: &Post, menu: &SiteMenu) -> askama::Result<String> {
    let mut paragraphs = split_paragraphs(Some(post.excerpt.as_str()));
    paragraphs.extend(split_paragraphs(Some(post.content.as_str())));

    PostTemplate {
        meta: PageMeta::for_post(post),
        chrome: Chrome::new(&format!("{}/{}", PUBLICATION_PATH, post.slug), menu),
        post,
        date: format_post_date(&post.date),
        paragraphs,
    }
    .render()
}

/// 404 body. `back_href` points at the nearest listing the visitor can use.
pub fn not_found_page(
    meta: PageMeta,
    current_path: &str,
    back_href: &str,
    back_label: &str,
    menu: &SiteMenu,
) -> askama::Result<String> {
    NotFoundTemplate {
        meta,
        chrome: Chrome::new(current_path, menu),
        back_href: back_href.to_string(),
        back_label: back_label.to_string(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(layout_json: &str) -> ServiceRecord {
        serde_json::from_str(layout_json).unwrap()
    }

    fn payroll_menu() -> SiteMenu {
        let records: Vec<ServiceRecord> = serde_json::from_str(
            r#"[{"slug": "tax-filing-services", "title": "Tax Filing Services"},
                {"slug": "payslip-management", "title": "Payslip Management"}]"#,
        )
        .unwrap();
        let mut menu = SiteMenu::default();
        menu.add(Category::Payroll, &records);
        menu
    }

    #[test]
    fn test_chrome_marks_active_category() {
        let chrome = Chrome::new("/payroll/tax-filing-services", &payroll_menu());
        let active: Vec<&str> = chrome.nav.iter().filter(|l| l.active).map(|l| l.label.as_str()).collect();
        assert_eq!(active, vec!["Payroll"]);

        let payroll = chrome.nav.iter().find(|l| l.label == "Payroll").unwrap();
        let children: Vec<(&str, bool)> = payroll
            .children
            .iter()
            .map(|c| (c.href.as_str(), c.active))
            .collect();
        assert_eq!(
            children,
            vec![
                ("/payroll/tax-filing-services", true),
                ("/payroll/payslip-management", false)
            ]
        );
    }

    #[test]
    fn test_header_renders_dropdowns_closed() {
        let html = home_page(&payroll_menu()).unwrap();
        assert!(html.contains("data-dropdown-toggle=\"Payroll\""));
        assert!(html.contains("Payslip Management"));
        assert!(!html.contains("data-dropdown-toggle=\"Academy\""));
        assert!(!html.contains("data-dropdown-toggle=\"Payroll\" aria-expanded=\"true\""));
        assert!(html.contains("data-menu hidden"));
    }

    #[test]
    fn test_academy_page_has_article_header() {
        let record = record(
            r#"{"slug": "workshops", "title": "Workshops", "seoTitle": "Workshops",
                "estimatedReadTime": 5, "lastUpdated": "2024-03-15",
                "sections": [{"id": "intro", "type": "text", "heading": "Intro", "content": "Hello"}]}"#,
        );
        let html = service_page(Category::Academy, &record, &SiteMenu::default()).unwrap();
        assert!(html.contains("Last updated: 15 March 2024"));
        assert!(html.contains("5 min read"));
        assert!(html.contains("id=\"intro\""));
    }

    #[test]
    fn test_themed_wrapper() {
        let record = record(
            r#"{"slug": "screening", "title": "Screening",
                "themeColors": {"primary": "red-700", "accent": "red-600", "background": "gray-50", "text": "gray-900"},
                "sections": []}"#,
        );
        let html = service_page(Category::Intelligence, &record, &SiteMenu::default()).unwrap();
        assert!(html.contains("bg-gray-50 text-gray-900"));
        assert!(!html.contains("Last updated"));
    }

    #[test]
    fn test_pages_carry_scripts() {
        let html = home_page(&SiteMenu::default()).unwrap();
        assert!(html.contains("IntersectionObserver"));
        assert!(html.contains("data-site-header"));
    }

    #[test]
    fn test_post_paragraphs() {
        let post: Post = serde_json::from_str(
            r#"{"slug": "p", "title": "Post", "excerpt": "Lead", "content": "One\n\nTwo",
                "author": "Aisha", "date": "2024-03-01", "tags": ["hr", "payroll"]}"#,
        )
        .unwrap();
        let html = post_page(&post, &SiteMenu::default()).unwrap();
        assert_eq!(html.matches("<p class=\"post-paragraph\">").count(), 3);
        assert!(html.contains("Fri Mar 01 2024"));
        assert!(html.contains("#payroll"));
    }
}
