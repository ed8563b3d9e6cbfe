//! Storage module for the filesystem-backed document store
//!
//! Every section owns one folder under the library base directory; a
//! document is a `.pdf` file inside it.

mod document_store;
mod types;

pub use document_store::DocumentStore;
pub use types::*;
