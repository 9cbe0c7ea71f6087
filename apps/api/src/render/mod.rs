//! Document rendering: replays a layout plan into PDF bytes, or builds a DOCX.
//!
//! Both writers are synchronous and CPU-bound. `render_document` is the async
//! entry point and moves the work onto the blocking pool.

pub mod docx;
pub mod handlers;
pub mod pdf;

use thiserror::Error;
use tracing::debug;

use crate::layout::PageStyle;
use crate::models::document::{DocumentKind, DocumentRequest, RenderedDocument};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("Render worker failed: {0}")]
    Worker(String),
}

/// Renders `request` in the requested format on the blocking thread pool.
pub async fn render_document(
    request: DocumentRequest,
    kind: DocumentKind,
    style: &PageStyle,
) -> Result<RenderedDocument, RenderError> {
    let style = style.clone();
    let document = tokio::task::spawn_blocking(move || match kind {
        DocumentKind::Pdf => pdf::render_pdf(&request, &style),
        DocumentKind::Docx => docx::render_docx(&request),
    })
    .await
    .map_err(|e| RenderError::Worker(e.to_string()))??;

    debug!(
        "Rendered {:?} document ({} bytes)",
        document.kind(),
        document.bytes().len()
    );
    Ok(document)
}
