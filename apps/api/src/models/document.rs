use serde::{Deserialize, Serialize};

use crate::models::letterhead::Letterhead;

/// Output format of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }
}

/// Everything needed to render one document. Created per request, never stored.
///
/// `body_text` is plain text: blank lines separate paragraphs, and heading
/// lines are either ALL CAPS or carry a `#` marker prefix.
#[derive(Debug, Clone)]
pub struct DocumentRequest {
    pub title: String,
    pub body_text: String,
    pub letterhead: Letterhead,
}

/// Rendered bytes plus their declared format.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    kind: DocumentKind,
    bytes: Vec<u8>,
}

impl RenderedDocument {
    pub fn new(kind: DocumentKind, bytes: Vec<u8>) -> Self {
        Self { kind, bytes }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
