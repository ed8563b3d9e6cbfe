//! PDF page rendering module
//!
//! Wraps MuPDF behind the [`DocumentRenderer`] trait. MuPDF is an optional
//! dependency (the `render` feature); whether rendering is usable is decided
//! once at startup as a [`RenderCapability`].

mod renderer;
mod types;

#[cfg(feature = "render")]
mod mupdf_renderer;

#[cfg(all(test, feature = "render"))]
pub(crate) mod fixtures;

#[cfg(feature = "render")]
pub use mupdf_renderer::MupdfRenderer;
pub use renderer::{DocumentRenderer, RenderCapability, UnavailableReason};
pub use types::{validate_page, Bitmap, RenderError};
