//! Renderer trait and capability resolution

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::RenderMode;

use super::types::{Bitmap, RenderError};

/// Page counting and single-page rasterization for a stored document
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Number of pages in the document
    async fn page_count(&self, path: &Path) -> Result<usize, RenderError>;

    /// Rasterize a 1-based page at default resolution
    async fn render_page(&self, path: &Path, page: usize) -> Result<Bitmap, RenderError>;
}

/// Why page rendering is switched off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// Built without the `render` feature
    NotCompiled,
    /// `PDF_RENDERING=off`
    DisabledByConfig,
}

/// Whether page rendering can be offered, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCapability {
    Available,
    Unavailable(UnavailableReason),
}

impl RenderCapability {
    /// Resolve the capability from the configured mode and the compiled features
    pub fn resolve(mode: RenderMode) -> Self {
        Self::resolve_with(mode, cfg!(feature = "render"))
    }

    fn resolve_with(mode: RenderMode, compiled: bool) -> Self {
        match (mode, compiled) {
            (RenderMode::Off, _) => RenderCapability::Unavailable(UnavailableReason::DisabledByConfig),
            (_, false) => {
                if mode == RenderMode::On {
                    tracing::warn!("PDF_RENDERING=on but the server was built without the `render` feature");
                }
                RenderCapability::Unavailable(UnavailableReason::NotCompiled)
            }
            (_, true) => RenderCapability::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, RenderCapability::Available)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderCapability::Available => "available",
            RenderCapability::Unavailable(UnavailableReason::NotCompiled) => "not-compiled",
            RenderCapability::Unavailable(UnavailableReason::DisabledByConfig) => "disabled",
        }
    }

    /// Construct the renderer backing this capability, if any
    pub fn renderer(&self) -> Option<Arc<dyn DocumentRenderer>> {
        if !self.is_available() {
            return None;
        }

        #[cfg(feature = "render")]
        {
            Some(Arc::new(super::MupdfRenderer::new()))
        }

        #[cfg(not(feature = "render"))]
        {
            None
        }
    }
}
