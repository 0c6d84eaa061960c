//! Page resolution: path parameters in, rendered page or not-found out.
//!
//! Shared by the HTTP handlers and the static export so both produce the
//! same bytes for the same content.
//!
//! Public API:
//! - [`Page`]: found or not-found HTML
//! - [`service`], [`category_index`], [`post`], [`publications`], [`home`]
//! - [`unknown_path`]: generic 404 body

use crate::content::{find, Category, ContentStore};
use crate::seo::PageMeta;
use crate::web::views::{self, SiteMenu, PUBLICATION_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Found(String),
    NotFound(String),
}

impl Page {
    pub fn is_found(&self) -> bool {
        matches!(self, Page::Found(_))
    }

    pub fn html(&self) -> &str {
        match self {
            Page::Found(html) | Page::NotFound(html) => html,
        }
    }

    pub fn into_html(self) -> String {
        match self {
            Page::Found(html) | Page::NotFound(html) => html,
        }
    }
}

pub fn home(store: &ContentStore) -> askama::Result<Page> {
    views::home_page(&SiteMenu::load(store)).map(Page::Found)
}

pub fn category_index(store: &ContentStore, category: Category) -> askama::Result<Page> {
    let records = store.services(category);
    views::category_index(category, &records, &SiteMenu::load(store)).map(Page::Found)
}

/// Service page for `slug`, or the category's "Service Not Found" page.
///
/// An unreadable or malformed content file behaves like an empty
/// collection, so every slug in it resolves to not-found.
pub fn service(store: &ContentStore, category: Category, slug: &str) -> askama::Result<Page> {
    let menu = SiteMenu::load(store);
    let records = store.services(category);
    match find(&records, slug) {
        Some(record) => views::service_page(category, record, &menu).map(Page::Found),
        None => {
            tracing::debug!("No {} service with slug '{}'", category.segment(), slug);
            let listing = format!("/{}", category.segment());
            views::not_found_page(
                PageMeta::service_not_found(category),
                &format!("{}/{}", listing, slug),
                &listing,
                &format!("Browse {}", category.display_name()),
                &menu,
            )
            .map(Page::NotFound)
        }
    }
}

pub fn publications(store: &ContentStore) -> askama::Result<Page> {
    let posts = store.posts();
    views::publication_index(&posts, &SiteMenu::load(store)).map(Page::Found)
}

pub fn post(store: &ContentStore, slug: &str) -> askama::Result<Page> {
    let menu = SiteMenu::load(store);
    let posts = store.posts();
    match find(&posts, slug) {
        Some(post) => views::post_page(post, &menu).map(Page::Found),
        None => {
            tracing::debug!("No publication with slug '{}'", slug);
            views::not_found_page(
                PageMeta::post_not_found(),
                &format!("{}/{}", PUBLICATION_PATH, slug),
                PUBLICATION_PATH,
                "Browse publications",
                &menu,
            )
            .map(Page::NotFound)
        }
    }
}

/// 404 body for paths that match no category.
pub fn unknown_path(store: &ContentStore, path: &str) -> askama::Result<Page> {
    views::not_found_page(PageMeta::page_not_found(), path, "/", "Back to home", &SiteMenu::load(store))
        .map(Page::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, file: &str, body: &str) {
        std::fs::write(dir.path().join(file), body).unwrap();
    }

    #[test]
    fn test_found_and_not_found() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "payrollData.json",
            r#"{"PayrollServices": [{"slug": "tax-filing-services", "title": "Tax Filing",
                "sections": [{"id": "intro", "type": "text", "heading": "Intro", "content": "Filed on time."}]}]}"#,
        );
        let store = ContentStore::new(dir.path());

        let page = service(&store, Category::Payroll, "tax-filing-services").unwrap();
        assert!(page.is_found());
        assert!(page.html().contains("Filed on time."));

        let missing = service(&store, Category::Payroll, "nope").unwrap();
        assert!(!missing.is_found());
        assert!(missing.html().contains("Service Not Found"));
    }

    #[test]
    fn test_header_lists_category_services() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "payrollData.json",
            r#"{"PayrollServices": [{"slug": "tax-filing-services", "title": "Tax Filing", "sections": []},
                {"slug": "payslip-management", "title": "Payslip Management", "sections": []}]}"#,
        );
        let store = ContentStore::new(dir.path());

        let page = unknown_path(&store, "/nowhere").unwrap();
        assert!(!page.is_found());
        assert!(page.html().contains("data-dropdown-toggle=\"Payroll\""));
        assert!(page.html().contains("payslip-management\""));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = ContentStore::new(dir.path());

        let page = service(&store, Category::Academy, "anything").unwrap();
        assert!(!page.is_found());
        assert!(page.html().contains("Service Not Found"));

        let index = category_index(&store, Category::Academy).unwrap();
        assert!(index.html().contains("Nothing published yet."));
    }

    #[test]
    fn test_post_not_found() {
        let dir = TempDir::new().unwrap();
        write(&dir, "publications.json", "[]");
        let store = ContentStore::new(dir.path());

        let page = post(&store, "ghost").unwrap();
        assert!(!page.is_found());
        assert!(page.html().contains("Publication Not Found"));
    }
}
