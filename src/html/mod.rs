//! HTML rendering module
//!
//! Server-side HTML for the two screens of the library: the section grid
//! and the per-section detail view. All user-provided text goes through
//! html-escape before it reaches the page.

mod templates;

pub use templates::{section_detail, section_grid, DetailView, Viewer, GRID_COLUMNS};
