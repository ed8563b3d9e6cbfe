//! Document Store
//!
//! Lists, saves, reads and deletes PDFs inside section folders using the
//! local filesystem.

use std::path::PathBuf;

use crate::library::{Section, SectionRegistry};

use super::types::{is_pdf_name, validate_file_name, StorageError};

/// Filesystem-backed document store
#[derive(Debug, Clone)]
pub struct DocumentStore {
    registry: SectionRegistry,
}

impl DocumentStore {
    pub fn new(registry: SectionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Full path of a document inside its section folder
    pub fn path_of(&self, section: &Section, file_name: &str) -> Result<PathBuf, StorageError> {
        validate_file_name(file_name)?;
        Ok(self.registry.folder_path(section).join(file_name))
    }

    /// List PDF file names in a section, sorted ascending.
    ///
    /// A missing folder yields an empty list.
    pub async fn list(&self, section: &Section) -> Result<Vec<String>, StorageError> {
        let folder = self.registry.folder_path(section);

        let mut entries = match tokio::fs::read_dir(&folder).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(section = %section.label, "Section folder missing, listing as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            // Follows symlinks; dangling links are skipped
            match tokio::fs::metadata(entry.path()).await {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => continue,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if is_pdf_name(&name) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// Write a document, replacing any file with the same name
    pub async fn save(
        &self,
        section: &Section,
        file_name: &str,
        data: &[u8],
    ) -> Result<PathBuf, StorageError> {
        if !is_pdf_name(file_name) {
            validate_file_name(file_name)?;
            return Err(StorageError::NotPdf(file_name.to_string()));
        }
        let path = self.path_of(section, file_name)?;

        tokio::fs::create_dir_all(self.registry.folder_path(section)).await?;
        tokio::fs::write(&path, data).await?;

        tracing::info!(
            section = %section.label,
            file = %file_name,
            size = data.len(),
            "Document saved"
        );
        Ok(path)
    }

    /// Read a document's raw bytes
    pub async fn read(&self, section: &Section, file_name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_of(section, file_name)?;
        tokio::fs::read(&path).await.map_err(|e| not_found_or_io(e, file_name))
    }

    /// Remove a document from its section folder
    pub async fn delete(&self, section: &Section, file_name: &str) -> Result<(), StorageError> {
        let path = self.path_of(section, file_name)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| not_found_or_io(e, file_name))?;

        tracing::info!(section = %section.label, file = %file_name, "Document deleted");
        Ok(())
    }
}

fn not_found_or_io(e: std::io::Error, file_name: &str) -> StorageError {
    if e.kind() == std::io::ErrorKind::NotFound {
        StorageError::NotFound(file_name.to_string())
    } else {
        StorageError::Io(e)
    }
}
