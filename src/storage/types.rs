//! Storage types

use thiserror::Error;

/// Extension accepted by the store, compared case-insensitively
pub const PDF_EXTENSION: &str = "pdf";

/// Document store errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),

    #[error("Not a PDF file: {0}")]
    NotPdf(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether a file name carries the `.pdf` extension (any case)
pub fn is_pdf_name(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case(PDF_EXTENSION))
        .unwrap_or(false)
}

/// Reject names that could escape the section folder.
pub fn validate_file_name(name: &str) -> Result<(), StorageError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StorageError::InvalidFileName(name.to_string()));
    }
    Ok(())
}
