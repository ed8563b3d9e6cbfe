//! Serializable selection state

use serde::{Deserialize, Serialize};

/// Severity of a one-shot notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Error,
}

/// One-shot notice shown on the next render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Which screen the current state renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    SectionGrid,
    SectionDetail { section: &'a str },
}

/// Process-local UI selection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub selected_section: Option<String>,
    pub selected_document: Option<String>,
    /// 1-based page shown in the viewer
    pub page: usize,
    pub flash: Option<Flash>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_section: None,
            selected_document: None,
            page: 1,
            flash: None,
        }
    }
}

impl ViewState {
    pub fn screen(&self) -> Screen<'_> {
        match &self.selected_section {
            Some(section) => Screen::SectionDetail { section },
            None => Screen::SectionGrid,
        }
    }

    /// Remove and return the pending flash
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }
}
