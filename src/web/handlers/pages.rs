// Page handlers for HTML rendering with Askama
//
// Content files are read on tokio's blocking pool. Found pages may be served
// from the moka page cache; not-found pages never are.

use axum::{
    extract::{Path, State},
    http::Uri,
    response::{Html, IntoResponse, Response},
};

use crate::api_server::{AppError, AppState};
use crate::content::Category;
use crate::web::site::{self, Page};

// ============================================================================
// Helpers
// ============================================================================

/// Run a page resolver off the async runtime.
async fn render_blocking<F>(resolve: F) -> Result<Page, AppError>
where
    F: FnOnce() -> askama::Result<Page> + Send + 'static,
{
    tokio::task::spawn_blocking(resolve)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))
}

/// Serve `key` from the page cache, or resolve and cache it if found.
async fn cached_page<F>(state: &AppState, key: String, resolve: F) -> Result<Html<String>, AppError>
where
    F: FnOnce() -> askama::Result<Page> + Send + 'static,
{
    if let Some(cache) = &state.cache {
        if let Some(html) = cache.get(&key).await {
            tracing::debug!("Page cache hit: {}", key);
            return Ok(Html(html));
        }
    }

    match render_blocking(resolve).await? {
        Page::Found(html) => {
            if let Some(cache) = &state.cache {
                cache.insert(key, html.clone()).await;
            }
            Ok(Html(html))
        }
        Page::NotFound(html) => Err(AppError::NotFoundPage(html)),
    }
}

async fn unknown_path(state: &AppState, path: String) -> AppError {
    let store = state.store.clone();
    match render_blocking(move || site::unknown_path(&store, &path)).await {
        Ok(page) => AppError::NotFoundPage(page.into_html()),
        Err(e) => e,
    }
}

// ============================================================================
// Home Page
// ============================================================================

pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let store = state.store.clone();
    cached_page(&state, "/".to_string(), move || site::home(&store)).await
}

// ============================================================================
// Service Pages
// ============================================================================

pub async fn category_page(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Html<String>, AppError> {
    let Some(category) = Category::from_segment(&segment) else {
        return Err(unknown_path(&state, format!("/{}", segment)).await);
    };

    let store = state.store.clone();
    cached_page(&state, format!("/{}", segment), move || {
        site::category_index(&store, category)
    })
    .await
}

pub async fn service_page(
    State(state): State<AppState>,
    Path((segment, slug)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let Some(category) = Category::from_segment(&segment) else {
        return Err(unknown_path(&state, format!("/{}/{}", segment, slug)).await);
    };

    let store = state.store.clone();
    let key = format!("/{}/{}", segment, slug);
    cached_page(&state, key, move || site::service(&store, category, &slug)).await
}

// ============================================================================
// Publications
// ============================================================================

pub async fn publication_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let store = state.store.clone();
    cached_page(&state, "/publication".to_string(), move || site::publications(&store)).await
}

pub async fn publication_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let store = state.store.clone();
    let key = format!("/publication/{}", slug);
    cached_page(&state, key, move || site::post(&store, &slug)).await
}

// ============================================================================
// Fallback
// ============================================================================

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    unknown_path(&state, uri.path().to_string()).await.into_response()
}
