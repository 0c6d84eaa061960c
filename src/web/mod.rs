//! HTML surface: templates, page resolution and (with `api`) axum handlers.

pub mod site;
pub mod views;

#[cfg(feature = "api")]
pub mod handlers;
