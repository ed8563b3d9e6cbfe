//! State transitions

use super::state::{Flash, ViewState};

/// A user action, already carried out against the store where needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    OpenSection(String),
    Back,
    Uploaded(String),
    UploadRejected(String),
    SelectDocument(String),
    GoToPage { page: usize, total: usize },
    Deleted(String),
    DeleteFailed(String),
}

impl ViewState {
    /// Apply a message and return the next state.
    ///
    /// Anything but `OpenSection` is ignored while no section is selected.
    pub fn update(mut self, msg: Msg) -> Self {
        if self.selected_section.is_none() && !matches!(msg, Msg::OpenSection(_)) {
            tracing::debug!(?msg, "Ignoring message without a selected section");
            return self;
        }

        match msg {
            Msg::OpenSection(label) => {
                self.selected_section = Some(label);
                self.selected_document = None;
                self.page = 1;
            }
            Msg::Back => {
                self = ViewState::default();
            }
            Msg::Uploaded(file_name) => {
                let section = self.selected_section.clone().unwrap_or_default();
                self.flash = Some(Flash::success(format!(
                    "`{}` uploaded to {}",
                    file_name, section
                )));
                self.selected_document = Some(file_name);
                self.page = 1;
            }
            Msg::UploadRejected(reason) => {
                self.flash = Some(Flash::error(format!("Upload failed: {}", reason)));
            }
            Msg::SelectDocument(file_name) => {
                if self.selected_document.as_deref() != Some(file_name.as_str()) {
                    self.page = 1;
                }
                self.selected_document = Some(file_name);
            }
            Msg::GoToPage { page, total } => {
                self.page = page.clamp(1, total.max(1));
            }
            Msg::Deleted(file_name) => {
                self.flash = Some(Flash::success(format!("Deleted `{}`", file_name)));
                self.selected_document = None;
                self.page = 1;
            }
            Msg::DeleteFailed(reason) => {
                self.flash = Some(Flash::error(format!("Failed to delete: {}", reason)));
            }
        }

        self
    }
}
