//! File serving routes
//!
//! Serves stored PDFs for download.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::storage::{is_pdf_name, StorageError};

/// Create the files router
pub fn router() -> Router<AppState> {
    Router::new().route("/:section/:filename", get(download))
}

/// GET /files/:section/:filename
async fn download(
    State(state): State<AppState>,
    Path((label, filename)): Path<(String, String)>,
) -> Result<Response> {
    let section = state
        .section(&label)
        .ok_or_else(|| AppError::NotFound(format!("Unknown section: {}", label)))?;

    if !is_pdf_name(&filename) {
        return Err(StorageError::NotFound(filename).into());
    }

    let bytes = state.store().read(section, &filename).await?;
    let content_type = mime_guess::from_path(&filename).first_or_octet_stream();

    tracing::debug!(section = %label, file = %filename, size = bytes.len(), "Serving download");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type.as_ref())
        .header(header::CONTENT_LENGTH, bytes.len())
        .header(header::CONTENT_DISPOSITION, content_disposition(&filename))
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// `attachment` disposition with an ASCII fallback and the UTF-8 name
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii() && c != '"' && !c.is_ascii_control() { c } else { '_' })
        .collect();
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}
