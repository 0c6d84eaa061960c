// Axum server module
//
// HTML pages for every content record plus a small JSON surface (slug lists
// and page metadata) used by the static export tooling and health checks.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use moka::future::Cache;
use serde::Serialize;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::content::{find, slugs, Category, ContentStore};
use crate::seo::PageMeta;
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub static_dir: PathBuf,
    /// Rendered pages keyed by request path. `None` when caching is off.
    pub cache: Option<Cache<String, String>>,
}

impl AppState {
    pub fn new(config: &SiteConfig) -> Self {
        tracing::info!("Content directory: {}", config.content_dir.display());
        let store = Arc::new(ContentStore::new(&config.content_dir));

        let cache = if config.page_cache_ttl_secs > 0 {
            tracing::info!("Initializing Moka page cache (TTL {}s)...", config.page_cache_ttl_secs);
            Some(
                Cache::builder()
                    .max_capacity(1_000)
                    .time_to_live(Duration::from_secs(config.page_cache_ttl_secs))
                    .build(),
            )
        } else {
            tracing::info!("Page cache disabled");
            None
        };

        Self {
            store,
            static_dir: config.static_dir.clone(),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // JSON endpoints
        .route("/api/:collection/slugs", get(list_slugs))
        .route("/api/:collection/:slug/meta", get(page_meta))

        // Pages (HTML)
        .route("/", get(pages::home_page))
        .route("/publication", get(pages::publication_index))
        .route("/publication/:slug", get(pages::publication_page))
        .route("/:category", get(pages::category_page))
        .route("/:category/:slug", get(pages::service_page))

        // Static assets
        .nest_service("/static", static_files)
        .fallback(pages::not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

const PUBLICATION_COLLECTION: &str = "publication";

#[derive(Debug, Serialize)]
struct StaticParam {
    slug: String,
}

/// Every slug in a collection, in file order, shaped as route params.
async fn list_slugs(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<StaticParam>>, AppError> {
    let category = parse_collection(&collection)?;
    let store = state.store.clone();

    let params = tokio::task::spawn_blocking(move || {
        let listed: Vec<String> = match category {
            Some(category) => slugs(&store.services(category)).into_iter().map(String::from).collect(),
            None => slugs(&store.posts()).into_iter().map(String::from).collect(),
        };
        listed.into_iter().map(|slug| StaticParam { slug }).collect::<Vec<_>>()
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(params))
}

/// Page metadata for one record; the not-found fallback comes back with 404.
async fn page_meta(
    State(state): State<AppState>,
    Path((collection, slug)): Path<(String, String)>,
) -> Result<Json<PageMeta>, AppError> {
    let category = parse_collection(&collection)?;
    let store = state.store.clone();

    let meta = tokio::task::spawn_blocking(move || match category {
        Some(category) => {
            let records = store.services(category);
            find(&records, &slug)
                .map(PageMeta::for_service)
                .ok_or_else(|| PageMeta::service_not_found(category))
        }
        None => {
            let posts = store.posts();
            find(&posts, &slug)
                .map(PageMeta::for_post)
                .ok_or_else(PageMeta::post_not_found)
        }
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    meta.map(Json).map_err(AppError::NotFoundMeta)
}

/// `Some(category)` for service collections, `None` for publications.
fn parse_collection(segment: &str) -> Result<Option<Category>, AppError> {
    if segment == PUBLICATION_COLLECTION {
        return Ok(None);
    }
    Category::from_segment(segment)
        .map(Some)
        .ok_or_else(|| AppError::NotFound(format!("Unknown collection '{}'", segment)))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    /// Rendered 404 page.
    NotFoundPage(String),
    /// Fallback metadata for a missing record.
    NotFoundMeta(PageMeta),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFoundPage(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
            AppError::NotFoundMeta(meta) => (StatusCode::NOT_FOUND, Json(meta)).into_response(),
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": message }))).into_response()
            }
            AppError::Internal(message) => {
                tracing::error!("{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}
