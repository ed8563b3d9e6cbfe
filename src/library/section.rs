//! Section registry
//!
//! Sections are fixed at startup from configuration and never change while
//! the server runs. Each one maps a display label to a folder under the
//! library base directory.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::SectionConfig;

/// A top-level category folder grouping related PDFs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub label: String,
    pub folder: String,
}

/// Immutable registry of configured sections, in configuration order
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    base_dir: PathBuf,
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(base_dir: impl Into<PathBuf>, sections: &[SectionConfig]) -> Self {
        Self {
            base_dir: base_dir.into(),
            sections: sections
                .iter()
                .map(|s| Section {
                    label: s.label.clone(),
                    folder: s.folder.clone(),
                })
                .collect(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by its label
    pub fn get(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// Absolute (or base-relative) folder backing a section
    pub fn folder_path(&self, section: &Section) -> PathBuf {
        self.base_dir.join(&section.folder)
    }

    /// Create every section folder that does not exist yet.
    ///
    /// Safe to call repeatedly.
    pub fn ensure_folders(&self) -> std::io::Result<()> {
        for section in &self.sections {
            let path = self.folder_path(section);
            if !path.is_dir() {
                tracing::info!(section = %section.label, path = %path.display(), "Creating section folder");
            }
            std::fs::create_dir_all(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry(base: &Path) -> SectionRegistry {
        SectionRegistry::new(
            base,
            &[SectionConfig::new("History"), SectionConfig::new("Static GK")],
        )
    }

    #[test]
    fn test_ensure_folders_creates_every_section() {
        let temp_dir = TempDir::new().unwrap();
        let registry = registry(&temp_dir.path().join("pdfs"));

        registry.ensure_folders().unwrap();

        for section in registry.sections() {
            assert!(registry.folder_path(section).is_dir());
        }
    }

    #[test]
    fn test_ensure_folders_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let registry = registry(temp_dir.path());

        registry.ensure_folders().unwrap();
        std::fs::write(temp_dir.path().join("History").join("keep.pdf"), b"%PDF").unwrap();
        registry.ensure_folders().unwrap();

        assert!(temp_dir.path().join("History").join("keep.pdf").exists());
    }

    #[test]
    fn test_lookup_by_label() {
        let registry = registry(Path::new("pdfs"));

        let section = registry.get("Static GK").unwrap();
        assert_eq!(section.folder, "Static GK");
        assert_eq!(registry.folder_path(section), Path::new("pdfs").join("Static GK"));
        assert!(registry.get("static gk").is_none());
        assert!(registry.get("Unknown").is_none());
    }
}
