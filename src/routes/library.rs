//! Library UI routes
//!
//! Every action is a form post that performs its side effect, feeds one
//! message through the view update and redirects back to `/`.
//!
//! Endpoints:
//! - GET / - Render the section grid or the selected section
//! - POST /sections - Open a section
//! - POST /back - Return to the section grid
//! - POST /upload - Upload a PDF into the open section
//! - POST /select - Select a document
//! - POST /page - Jump to a page of the selected document
//! - POST /delete - Delete the selected document

use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::html::{section_detail, section_grid, DetailView, Viewer};
use crate::library::Section;
use crate::state::AppState;
use crate::storage::{is_pdf_name, validate_file_name};
use crate::view::{Msg, Screen, ViewState};

/// Create the library UI router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/sections", post(open_section))
        .route("/back", post(back))
        .route("/upload", post(upload))
        .route("/select", post(select_document))
        .route("/page", post(go_to_page))
        .route("/delete", post(delete_document))
}

#[derive(Debug, Deserialize)]
pub struct SectionForm {
    pub section: String,
}

#[derive(Debug, Deserialize)]
pub struct DocumentForm {
    pub document: String,
}

#[derive(Debug, Deserialize)]
pub struct PageForm {
    pub page: i64,
}

fn back_to_index() -> Response {
    Redirect::to("/").into_response()
}

/// Section currently open in the view, if any
fn current_section(state: &AppState, view: &ViewState) -> Option<Section> {
    view.selected_section
        .as_deref()
        .and_then(|label| state.section(label))
        .cloned()
}

/// GET /
async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let view = state.view_for_render();

    let label = match view.screen() {
        Screen::SectionGrid => {
            return Ok(Html(section_grid(
                state.registry().sections(),
                view.flash.as_ref(),
            )));
        }
        Screen::SectionDetail { section } => section.to_string(),
    };

    let Some(section) = state.section(&label).cloned() else {
        tracing::warn!(section = %label, "Selected section no longer configured");
        state.dispatch(Msg::Back);
        return Ok(Html(section_grid(
            state.registry().sections(),
            view.flash.as_ref(),
        )));
    };

    let documents = state.store().list(&section).await?;
    let selected = view
        .selected_document
        .as_deref()
        .filter(|name| documents.iter().any(|d| d == name));

    let viewer = match selected {
        None => Viewer::Empty,
        Some(name) => viewer_for(&state, &section, name, view.page).await,
    };

    Ok(Html(section_detail(&DetailView {
        section: &section,
        documents: &documents,
        selected,
        viewer,
        flash: view.flash.as_ref(),
    })))
}

async fn viewer_for(state: &AppState, section: &Section, document: &str, page: usize) -> Viewer {
    let Some(renderer) = state.renderer() else {
        return Viewer::Unavailable;
    };

    let path = match state.store().path_of(section, document) {
        Ok(path) => path,
        Err(e) => return Viewer::Failed(e.to_string()),
    };

    match renderer.page_count(&path).await {
        Ok(total) => Viewer::Page {
            page: page.clamp(1, total.max(1)),
            total,
        },
        Err(e) => {
            tracing::warn!(section = %section.label, file = %document, "Failed to open document: {}", e);
            Viewer::Failed(e.to_string())
        }
    }
}

/// POST /sections
async fn open_section(
    State(state): State<AppState>,
    Form(form): Form<SectionForm>,
) -> Result<Response> {
    let Some(section) = state.section(&form.section).cloned() else {
        return Err(AppError::NotFound(format!("Unknown section: {}", form.section)));
    };
    tracing::debug!(section = %form.section, "Opening section");
    state.dispatch(Msg::OpenSection(form.section));

    // Opening a section selects its first PDF
    match state.store().list(&section).await {
        Ok(documents) => {
            if let Some(first) = documents.into_iter().next() {
                state.dispatch(Msg::SelectDocument(first));
            }
        }
        Err(e) => tracing::warn!(section = %section.label, "Failed to list section: {}", e),
    }
    Ok(back_to_index())
}

/// POST /back
async fn back(State(state): State<AppState>) -> Response {
    state.dispatch(Msg::Back);
    back_to_index()
}

/// POST /upload
async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Result<Response> {
    let view = state.view();
    let Some(section) = current_section(&state, &view) else {
        return Err(AppError::BadRequest("No section selected".to_string()));
    };

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read upload: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("").to_string();
        if file_name.is_empty() {
            state.dispatch(Msg::UploadRejected("no file selected".to_string()));
            return Ok(back_to_index());
        }
        if !is_pdf_name(&file_name) {
            tracing::warn!(file = %file_name, "Rejecting non-PDF upload");
            state.dispatch(Msg::UploadRejected(format!(
                "`{}` is not a PDF; only .pdf files are accepted",
                file_name
            )));
            return Ok(back_to_index());
        }

        let data = field.bytes().await.map_err(|e| {
            tracing::error!("Failed to read file data: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;

        tracing::debug!("Read {} bytes of file data", data.len());

        let msg = match state.store().save(&section, &file_name, &data).await {
            Ok(_) => Msg::Uploaded(file_name),
            Err(e) => {
                tracing::warn!(section = %section.label, file = %file_name, "Upload failed: {}", e);
                Msg::UploadRejected(e.to_string())
            }
        };
        state.dispatch(msg);
        return Ok(back_to_index());
    }

    tracing::warn!("No file field found in multipart upload");
    state.dispatch(Msg::UploadRejected("no file provided".to_string()));
    Ok(back_to_index())
}

/// POST /select
async fn select_document(
    State(state): State<AppState>,
    Form(form): Form<DocumentForm>,
) -> Result<Response> {
    validate_file_name(&form.document)?;
    state.dispatch(Msg::SelectDocument(form.document));
    Ok(back_to_index())
}

/// POST /page
async fn go_to_page(
    State(state): State<AppState>,
    Form(form): Form<PageForm>,
) -> Result<Response> {
    let view = state.view();
    let (Some(section), Some(document)) =
        (current_section(&state, &view), view.selected_document.clone())
    else {
        return Ok(back_to_index());
    };
    let renderer = state.renderer().ok_or(AppError::RenderUnavailable)?;

    let path = state.store().path_of(&section, &document)?;
    let total = renderer.page_count(&path).await?;
    let page = usize::try_from(form.page.max(1)).unwrap_or(1);

    state.dispatch(Msg::GoToPage { page, total });
    Ok(back_to_index())
}

/// POST /delete
async fn delete_document(State(state): State<AppState>) -> Response {
    let view = state.view();
    let (Some(section), Some(document)) =
        (current_section(&state, &view), view.selected_document.clone())
    else {
        return back_to_index();
    };

    let msg = match state.store().delete(&section, &document).await {
        Ok(()) => Msg::Deleted(document),
        Err(e) => {
            tracing::warn!(section = %section.label, file = %document, "Delete failed: {}", e);
            Msg::DeleteFailed(e.to_string())
        }
    };
    state.dispatch(msg);
    back_to_index()
}
