//! Static export - writes every page as `<path>/index.html` under an output
//! directory, plus a top-level `404.html`.
//!
//! Pages come from the same views the server renders, built from one load
//! of each collection. A category whose content file cannot be loaded is
//! exported with an empty index. Slugs that are not a single safe path
//! segment, and repeated slugs, are skipped.

use std::path::{Path, PathBuf};

use thiserror::Error;

use rustc_hash::FxHashSet;

use crate::content::{Category, ContentStore, ServiceRecord, Slugged};
use crate::seo::PageMeta;
use crate::web::site::Page;
use crate::web::views::{self, SiteMenu, PUBLICATION_PATH};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render {path}: {source}")]
    Render {
        path: String,
        #[source]
        source: askama::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Home, category indexes and the publication index.
    pub index_pages: usize,
    pub service_pages: usize,
    pub post_pages: usize,
    /// Every file written, relative to the output directory.
    pub files: Vec<PathBuf>,
}

impl ExportReport {
    pub fn total_pages(&self) -> usize {
        self.index_pages + self.service_pages + self.post_pages
    }
}

struct Exporter<'a> {
    out_dir: &'a Path,
    report: ExportReport,
}

impl<'a> Exporter<'a> {
    /// Write `page` at `route` (`/payroll/x` -> `payroll/x/index.html`).
    fn write_route(&mut self, route: &str, page: askama::Result<Page>) -> Result<(), ExportError> {
        let page = page.map_err(|source| ExportError::Render {
            path: route.to_string(),
            source,
        })?;
        if !page.is_found() {
            tracing::warn!("Skipping {}: resolved to not-found", route);
            return Ok(());
        }

        let relative = Path::new(route.trim_start_matches('/')).join("index.html");
        self.write_file(relative, page.html())
    }

    fn write_file(&mut self, relative: PathBuf, html: &str) -> Result<(), ExportError> {
        let path = self.out_dir.join(&relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, html).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Wrote {}", path.display());
        self.report.files.push(relative);
        Ok(())
    }
}

/// A slug usable as a single path segment under the output directory.
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains(['/', '\\']) && !slug.contains("..")
}

/// Slugs to export, in file order: unsafe slugs and repeats are skipped
/// with a warning. Repeats would resolve to the first record anyway.
fn exportable<'r, R: Slugged>(records: &'r [R], listing: &str) -> Vec<&'r R> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        let slug = record.slug();
        if !is_safe_slug(slug) {
            tracing::warn!("Skipping {} entry with unsafe slug '{}'", listing, slug);
            continue;
        }
        if !seen.insert(slug) {
            tracing::warn!("Skipping duplicate slug {}/{}", listing, slug);
            continue;
        }
        kept.push(record);
    }
    kept
}

/// Export the whole site into `out_dir`.
pub fn export_site(store: &ContentStore, out_dir: &Path) -> Result<ExportReport, ExportError> {
    let mut exporter = Exporter {
        out_dir,
        report: ExportReport::default(),
    };

    let collections: Vec<(Category, Vec<ServiceRecord>)> = Category::ALL
        .into_iter()
        .map(|category| (category, store.services(category)))
        .collect();
    let mut menu = SiteMenu::default();
    for (category, records) in &collections {
        menu.add(*category, records);
    }

    exporter.write_route("/", views::home_page(&menu).map(Page::Found))?;
    exporter.report.index_pages += 1;

    for (category, records) in &collections {
        let category = *category;
        let listing = format!("/{}", category.segment());

        exporter.write_route(&listing, views::category_index(category, records, &menu).map(Page::Found))?;
        exporter.report.index_pages += 1;

        for record in exportable(records, &listing) {
            let route = format!("{}/{}", listing, record.slug);
            exporter.write_route(&route, views::service_page(category, record, &menu).map(Page::Found))?;
            exporter.report.service_pages += 1;
        }
    }

    let posts = store.posts();
    exporter.write_route(PUBLICATION_PATH, views::publication_index(&posts, &menu).map(Page::Found))?;
    exporter.report.index_pages += 1;

    for post in exportable(&posts, PUBLICATION_PATH) {
        let route = format!("{}/{}", PUBLICATION_PATH, post.slug);
        exporter.write_route(&route, views::post_page(post, &menu).map(Page::Found))?;
        exporter.report.post_pages += 1;
    }

    let not_found = views::not_found_page(PageMeta::page_not_found(), "/404", "/", "Back to home", &menu)
        .map_err(|source| ExportError::Render {
            path: "/404".to_string(),
            source,
        })?;
    exporter.write_file(PathBuf::from("404.html"), &not_found)?;

    let report = exporter.report;
    tracing::info!(
        "Exported {} pages ({} services, {} posts) to {}",
        report.total_pages(),
        report.service_pages,
        report.post_pages,
        out_dir.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn content_dir(payroll: &str, publications: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("payrollData.json"), payroll).unwrap();
        std::fs::write(dir.path().join("publications.json"), publications).unwrap();
        dir
    }

    #[test]
    fn test_export_writes_every_page() {
        let content = content_dir(
            r#"{"PayrollServices": [
                {"slug": "tax-filing-services", "title": "Tax Filing", "sections": []},
                {"slug": "payroll-outsourcing", "title": "Outsourcing", "sections": []}
            ]}"#,
            r#"[{"id": 1, "slug": "hiring-trends", "title": "Hiring Trends"}]"#,
        );
        let out = TempDir::new().unwrap();

        let store = ContentStore::new(content.path());
        let report = export_site(&store, out.path()).unwrap();

        // home + 4 categories + publication index
        assert_eq!(report.index_pages, 6);
        assert_eq!(report.service_pages, 2);
        assert_eq!(report.post_pages, 1);
        assert_eq!(report.total_pages(), 9);

        let out = out.path();
        assert!(out.join("index.html").is_file());
        assert!(out.join("payroll/tax-filing-services/index.html").is_file());
        assert!(out.join("publication/hiring-trends/index.html").is_file());
        assert!(out.join("academy/index.html").is_file());

        let not_found = std::fs::read_to_string(out.join("404.html")).unwrap();
        assert!(not_found.contains("Page Not Found"));
    }

    #[test]
    fn test_export_stays_inside_out_dir() {
        let content = content_dir(
            r#"{"PayrollServices": [
                {"slug": "../../escaped", "title": "Escaped", "sections": []},
                {"slug": "a/b", "title": "Nested", "sections": []},
                {"slug": "", "title": "Blank", "sections": []},
                {"slug": "dup", "title": "First", "sections": []},
                {"slug": "dup", "title": "Second", "sections": []}
            ]}"#,
            r#"[{"slug": "..\\up", "title": "Up"}, {"slug": "post", "title": "Post"}, {"slug": "post", "title": "Again"}]"#,
        );
        let root = TempDir::new().unwrap();
        let out = root.path().join("a").join("b");

        let store = ContentStore::new(content.path());
        let report = export_site(&store, &out).unwrap();

        assert_eq!(report.service_pages, 1);
        assert_eq!(report.post_pages, 1);
        assert!(!root.path().join("a/escaped").exists());
        assert!(!out.join("payroll/a/b/index.html").exists());

        let dup_files = report
            .files
            .iter()
            .filter(|f| f.as_path() == Path::new("payroll/dup/index.html"))
            .count();
        assert_eq!(dup_files, 1);
        let dup = std::fs::read_to_string(out.join("payroll/dup/index.html")).unwrap();
        assert!(dup.contains("First"));
        assert!(report.files.iter().all(|f| !f.to_string_lossy().contains("..")));
    }
}
