//! Request field validation and binary download responses shared by the
//! drafting and rendering handlers.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::models::document::RenderedDocument;

/// Fails with a 400 naming every field whose value is missing.
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    match missing.as_slice() {
        [] => Ok(()),
        [single] => Err(AppError::Validation(format!(
            "Missing required field: {single}"
        ))),
        many => Err(AppError::Validation(format!(
            "Missing required fields: {}",
            many.join(", ")
        ))),
    }
}

/// Removes quotes, path separators and control characters, plus a trailing
/// `.{extension}` the caller may have included. Falls back to `default`.
pub fn sanitize_filename(requested: Option<&str>, extension: &str, default: &str) -> String {
    let cleaned: String = requested
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '/' | '\\'))
        .collect();
    let cleaned = cleaned.trim();

    let suffix = format!(".{extension}");
    let stem = match cleaned.len().checked_sub(suffix.len()) {
        Some(cut)
            if cleaned.is_char_boundary(cut)
                && cleaned[cut..].eq_ignore_ascii_case(&suffix) =>
        {
            cleaned[..cut].trim_end()
        }
        _ => cleaned,
    };

    if stem.is_empty() {
        default.to_string()
    } else {
        stem.to_string()
    }
}

/// A rendered document sent back as an attachment.
pub struct DocumentDownload {
    filename: String,
    document: RenderedDocument,
}

impl DocumentDownload {
    /// `filename` is the sanitized stem; the extension comes from the document kind.
    pub fn new(filename: String, document: RenderedDocument) -> Self {
        Self { filename, document }
    }
}

impl IntoResponse for DocumentDownload {
    fn into_response(self) -> Response {
        let kind = self.document.kind();
        let disposition = format!(
            "attachment; filename=\"{}.{}\"",
            self.filename,
            kind.extension()
        );
        (
            [
                (header::CONTENT_TYPE, kind.mime_type().to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            Bytes::from(self.document.into_bytes()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::DocumentKind;
    use axum::http::StatusCode;

    #[test]
    fn test_require_fields_lists_only_missing() {
        assert!(require_fields(&[("content", Some("x"))]).is_ok());

        let single = require_fields(&[("content", None)]).unwrap_err();
        assert_eq!(single.to_string(), "Missing required field: content");

        let many = require_fields(&[
            ("projectDetails", Some("x")),
            ("projectName", None),
            ("pricing", None),
        ])
        .unwrap_err();
        assert_eq!(
            many.to_string(),
            "Missing required fields: projectName, pricing"
        );
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename(None, "pdf", "proposal"), "proposal");
        assert_eq!(sanitize_filename(Some("  "), "pdf", "document"), "document");
        assert_eq!(
            sanitize_filename(Some("../etc/\"passwd\""), "pdf", "document"),
            "..etcpasswd"
        );
        assert_eq!(sanitize_filename(Some("Q3 Offer.PDF"), "pdf", "d"), "Q3 Offer");
        assert_eq!(sanitize_filename(Some("notes.pdf"), "docx", "d"), "notes.pdf");
        assert_eq!(sanitize_filename(Some("a\r\nb"), "pdf", "d"), "ab");
        assert_eq!(sanitize_filename(Some(".pdf"), "pdf", "document"), "document");
    }

    #[test]
    fn test_download_headers() {
        let document = RenderedDocument::new(DocumentKind::Docx, b"PK\x03\x04".to_vec());
        let response = DocumentDownload::new("offer".to_string(), document).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"offer.docx\""
        );
    }
}
