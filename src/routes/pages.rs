//! Page rendering routes
//!
//! Serves one rasterized page of a stored PDF as PNG.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};

use crate::error::{AppError, Result};
use crate::pdf::RenderError;
use crate::state::AppState;
use crate::storage::{is_pdf_name, StorageError};

/// Create the render router
pub fn router() -> Router<AppState> {
    Router::new().route("/:section/:filename/:page", get(render_page))
}

/// GET /render/:section/:filename/:page
async fn render_page(
    State(state): State<AppState>,
    Path((label, filename, page)): Path<(String, String, usize)>,
) -> Result<Response> {
    let renderer = state.renderer().ok_or(AppError::RenderUnavailable)?;
    let section = state
        .section(&label)
        .ok_or_else(|| AppError::NotFound(format!("Unknown section: {}", label)))?;

    if !is_pdf_name(&filename) {
        return Err(StorageError::NotFound(filename).into());
    }
    let path = state.store().path_of(section, &filename)?;
    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        return Err(StorageError::NotFound(filename).into());
    }

    let bitmap = renderer.render_page(&path, page).await?;
    let png = tokio::task::spawn_blocking(move || bitmap.encode_png())
        .await
        .map_err(|e| RenderError::ImageError(format!("Task join error: {}", e)))??;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .header(header::CONTENT_LENGTH, png.len())
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from(png))
        .map_err(|e| AppError::Internal(e.to_string()))
}
