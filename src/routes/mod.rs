//! Route modules for the PDF Library server

pub mod files;
pub mod health;
pub mod library;
pub mod pages;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::view::ViewState;

/// Build the complete application router
pub fn app(state: AppState) -> Router {
    let upload_limit = state.config().server.max_upload_bytes;

    Router::new()
        .merge(library::router().layer(DefaultBodyLimit::max(upload_limit)))
        .route("/health", get(health::health_check))
        .route("/api/v1/health", get(health::health_check))
        .route("/api/v1/state", get(view_state))
        .nest("/files", files::router())
        .nest("/render", pages::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /api/v1/state
async fn view_state(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.view())
}
