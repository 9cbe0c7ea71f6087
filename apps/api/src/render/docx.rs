//! DOCX writer: centered letterhead, a `Heading1` title, then one paragraph per
//! blank-line-separated chunk of the body. Pagination is left to the word processor.

use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, LineSpacing, Paragraph, Run, Style, StyleType};

use crate::models::document::{DocumentKind, DocumentRequest, RenderedDocument};
use crate::models::letterhead::{LabeledField, Letterhead};
use crate::render::RenderError;

// Sizes are in half-points.
const COMPANY_NAME_SIZE: usize = 36;
const DETAILS_SIZE: usize = 18;
const TITLE_SIZE: usize = 32;
const BODY_SIZE: usize = 24;

// Spacing is in twentieths of a point.
const COMPANY_NAME_SPACING_AFTER: u32 = 300;
const DETAILS_SPACING_AFTER: u32 = 200;
const LAST_DETAILS_SPACING_AFTER: u32 = 400;
const TITLE_SPACING_AFTER: u32 = 400;
const BODY_SPACING_AFTER: u32 = 200;

const TITLE_STYLE_ID: &str = "Heading1";

/// Builds the DOCX package for `request`.
pub fn render_docx(request: &DocumentRequest) -> Result<RenderedDocument, RenderError> {
    let mut docx = Docx::new().add_style(
        Style::new(TITLE_STYLE_ID, StyleType::Paragraph)
            .name("Heading 1")
            .size(TITLE_SIZE)
            .bold(),
    );

    for paragraph in letterhead_paragraphs(&request.letterhead) {
        docx = docx.add_paragraph(paragraph);
    }
    docx = docx.add_paragraph(title_paragraph(&request.title));
    for chunk in split_paragraphs(&request.body_text) {
        docx = docx.add_paragraph(body_paragraph(&chunk));
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| RenderError::Docx(e.to_string()))?;
    Ok(RenderedDocument::new(DocumentKind::Docx, cursor.into_inner()))
}

/// Splits body text on blank (whitespace-only) lines. Each chunk keeps its
/// non-blank lines, trimmed.
pub fn split_paragraphs(body: &str) -> Vec<Vec<&str>> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Company name, then `registration | phone | website`, then `email | address`.
/// A blank name and detail rows with nothing to show are left out.
fn letterhead_paragraphs(letterhead: &Letterhead) -> Vec<Paragraph> {
    let mut rows: Vec<Vec<LabeledField<'_>>> = vec![letterhead.primary_details()];
    let mut contact = Vec::new();
    if let Some(email) = letterhead.email() {
        contact.push(LabeledField {
            label: "Email",
            value: email,
        });
    }
    if let Some(address) = letterhead.address() {
        contact.push(LabeledField {
            label: "Address",
            value: address,
        });
    }
    rows.push(contact);
    rows.retain(|row| !row.is_empty());

    let mut paragraphs = Vec::new();
    if let Some(name) = letterhead.company_name() {
        paragraphs.push(
            Paragraph::new()
                .add_run(Run::new().add_text(name).size(COMPANY_NAME_SIZE).bold())
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(COMPANY_NAME_SPACING_AFTER)),
        );
    }

    let last = rows.len().saturating_sub(1);
    for (i, row) in rows.iter().enumerate() {
        let spacing = if i == last {
            LAST_DETAILS_SPACING_AFTER
        } else {
            DETAILS_SPACING_AFTER
        };
        paragraphs.push(details_paragraph(row, spacing));
    }
    paragraphs
}

fn details_paragraph(fields: &[LabeledField<'_>], spacing_after: u32) -> Paragraph {
    let mut paragraph = Paragraph::new()
        .align(AlignmentType::Center)
        .line_spacing(LineSpacing::new().after(spacing_after));
    for (i, field) in fields.iter().enumerate() {
        let label = if i == 0 {
            format!("{}: ", field.label)
        } else {
            format!(" | {}: ", field.label)
        };
        paragraph = paragraph
            .add_run(Run::new().add_text(label).size(DETAILS_SIZE).bold())
            .add_run(Run::new().add_text(field.value).size(DETAILS_SIZE));
    }
    paragraph
}

fn title_paragraph(title: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(title.trim().to_uppercase()))
        .style(TITLE_STYLE_ID)
        .align(AlignmentType::Center)
        .line_spacing(LineSpacing::new().after(TITLE_SPACING_AFTER))
}

fn body_paragraph(lines: &[&str]) -> Paragraph {
    let mut run = Run::new().size(BODY_SIZE);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(*line);
    }
    Paragraph::new()
        .add_run(run)
        .line_spacing(LineSpacing::new().after(BODY_SPACING_AFTER))
}
