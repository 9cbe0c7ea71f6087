//! Axum route handlers that turn caller-supplied text into PDF or DOCX files.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::document::{DocumentKind, DocumentRequest};
use crate::models::letterhead::Letterhead;
use crate::models::present;
use crate::render::render_document;
use crate::routes::download::{require_fields, sanitize_filename, DocumentDownload};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    pub content: Option<String>,
    pub filename: Option<String>,
    pub title: Option<String>,
    pub letterhead: Option<Letterhead>,
}

/// Output options shared by every file-producing endpoint.
pub struct DownloadOptions<'a> {
    pub kind: DocumentKind,
    pub filename: Option<&'a str>,
    pub default_filename: &'a str,
    pub title: Option<&'a str>,
    pub letterhead: Option<Letterhead>,
    /// Message used for the 500 response if rendering fails.
    pub failure_message: &'a str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-pdf
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<DocumentDownload, AppError> {
    let Json(request) = payload?;
    render_content(&state, request, DocumentKind::Pdf, "Failed to generate PDF").await
}

/// POST /api/generate-doc
pub async fn handle_generate_doc(
    State(state): State<AppState>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<DocumentDownload, AppError> {
    let Json(request) = payload?;
    render_content(&state, request, DocumentKind::Docx, "Failed to generate DOC").await
}

async fn render_content(
    state: &AppState,
    request: ContentRequest,
    kind: DocumentKind,
    failure_message: &str,
) -> Result<DocumentDownload, AppError> {
    let content = present(&request.content);
    require_fields(&[("content", content)])?;

    // Body is passed through untrimmed; only the presence check trims.
    let body = request.content.clone().unwrap_or_default();
    render_download(
        state,
        body,
        DownloadOptions {
            kind,
            filename: present(&request.filename),
            default_filename: "document",
            title: present(&request.title),
            letterhead: request.letterhead,
            failure_message,
        },
    )
    .await
}

/// Renders `body_text` and wraps it as an attachment.
///
/// The title defaults to the filename; the letterhead defaults to the
/// configured one.
pub async fn render_download(
    state: &AppState,
    body_text: String,
    options: DownloadOptions<'_>,
) -> Result<DocumentDownload, AppError> {
    let filename = sanitize_filename(
        options.filename,
        options.kind.extension(),
        options.default_filename,
    );
    let title = options
        .title
        .map(str::to_string)
        .unwrap_or_else(|| filename.clone());
    let letterhead = options
        .letterhead
        .unwrap_or_else(|| state.config.letterhead.clone());

    let request = DocumentRequest {
        title,
        body_text,
        letterhead,
    };

    let document = render_document(request, options.kind, &state.page_style)
        .await
        .map_err(|e| AppError::render(options.failure_message, e))?;

    info!(
        "Rendered {}.{} ({} bytes)",
        filename,
        options.kind.extension(),
        document.bytes().len()
    );
    Ok(DocumentDownload::new(filename, document))
}
