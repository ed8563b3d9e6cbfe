//! Page rendering using MuPDF
//!
//! MuPDF's fz_context is not thread-safe and its calls block, so each
//! operation opens a fresh document on the blocking thread pool.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mupdf::{Colorspace, Document, Matrix};

use super::renderer::DocumentRenderer;
use super::types::{validate_page, Bitmap, RenderError};

/// MuPDF-backed [`DocumentRenderer`]
#[derive(Debug, Clone, Default)]
pub struct MupdfRenderer;

impl MupdfRenderer {
    pub fn new() -> Self {
        Self
    }

    fn open_document(path: &Path) -> Result<Document, RenderError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| RenderError::LoadError("invalid path encoding".into()))?;
        Document::open(path_str).map_err(|e| RenderError::LoadError(e.to_string()))
    }

    fn count_pages(path: &Path) -> Result<usize, RenderError> {
        let doc = Self::open_document(path)?;
        Ok(doc.page_count()? as usize)
    }

    fn rasterize(path: &Path, page_num: usize) -> Result<Bitmap, RenderError> {
        let doc = Self::open_document(path)?;
        let page_count = doc.page_count()? as usize;
        validate_page(page_num, page_count)?;

        let page = doc.load_page((page_num - 1) as i32)?;

        // Identity transform: 72 dpi, one pixel per point
        let matrix = Matrix::new_scale(1.0, 1.0);
        let colorspace = Colorspace::device_rgb();
        let pixmap = page.to_pixmap(&matrix, &colorspace, false, true)?;

        Ok(Bitmap::from_samples(
            pixmap.width() as u32,
            pixmap.height() as u32,
            pixmap.n() as usize,
            pixmap.samples(),
        ))
    }
}

#[async_trait]
impl DocumentRenderer for MupdfRenderer {
    async fn page_count(&self, path: &Path) -> Result<usize, RenderError> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::count_pages(&path))
            .await
            .map_err(|e| RenderError::RenderError(format!("Task join error: {}", e)))?
    }

    async fn render_page(&self, path: &Path, page: usize) -> Result<Bitmap, RenderError> {
        let path: PathBuf = path.to_path_buf();
        let bitmap = tokio::task::spawn_blocking(move || Self::rasterize(&path, page))
            .await
            .map_err(|e| RenderError::RenderError(format!("Task join error: {}", e)))??;

        tracing::debug!(
            page = page,
            width = bitmap.width,
            height = bitmap.height,
            "Rendered page"
        );
        Ok(bitmap)
    }
}
