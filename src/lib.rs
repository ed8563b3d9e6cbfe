//! PDF Library Server
//!
//! A single-user web library that files PDFs into fixed topical sections,
//! with upload, download, deletion and a page-by-page viewer.
//!
//! # Modules
//!
//! - `library`: Fixed section registry
//! - `storage`: Filesystem document store per section
//! - `pdf`: Page counting and rasterization (MuPDF, optional)
//! - `view`: Serializable view state and its update function
//! - `html`: Server-rendered screens
//! - `routes`: HTTP handlers wiring the above together

pub mod config;
pub mod error;
pub mod html;
pub mod library;
pub mod pdf;
pub mod routes;
pub mod state;
pub mod storage;
pub mod view;
