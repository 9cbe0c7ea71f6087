//! PDF writer: replays a `DocumentPlan` onto printpdf pages using the
//! built-in Helvetica faces.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};
use tracing::debug;

use crate::layout::font_metrics::FontWeight;
use crate::layout::plan::{DocumentPlan, PagePlan};
use crate::layout::{plan_document, PageStyle};
use crate::models::document::{DocumentKind, DocumentRequest, RenderedDocument};
use crate::render::RenderError;

const LAYER_NAME: &str = "Layer 1";

/// Lays out and writes `request` as an A4 PDF.
pub fn render_pdf(
    request: &DocumentRequest,
    style: &PageStyle,
) -> Result<RenderedDocument, RenderError> {
    let plan = plan_document(request, style);
    debug!("PDF plan has {} page(s)", plan.page_count());
    let bytes = write_plan(&plan, &request.title)?;
    Ok(RenderedDocument::new(DocumentKind::Pdf, bytes))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn for_weight(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn write_plan(plan: &DocumentPlan, title: &str) -> Result<Vec<u8>, RenderError> {
    let width = Mm(plan.page_width_mm);
    let height = Mm(plan.page_height_mm);
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
    };

    for (index, page) in plan.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(width, height, LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };
        draw_page(&layer, page, plan.page_height_mm, &fonts);
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

/// Plans measure from the top edge; PDF user space measures from the bottom.
fn draw_page(layer: &PdfLayerReference, page: &PagePlan, page_height_mm: f32, fonts: &Fonts) {
    for text in &page.texts {
        layer.use_text(
            text.text.clone(),
            text.size_pt,
            Mm(text.x_mm),
            Mm(page_height_mm - text.baseline_mm),
            fonts.for_weight(text.weight),
        );
    }

    for rule in &page.rules {
        let y = Mm(page_height_mm - rule.y_mm);
        layer.set_outline_thickness(rule.thickness_pt);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(rule.x1_mm), y), false),
                (Point::new(Mm(rule.x2_mm), y), false),
            ],
            is_closed: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_page_style;
    use crate::models::letterhead::Letterhead;

    fn request(body: &str) -> DocumentRequest {
        DocumentRequest {
            title: "proposal".to_string(),
            body_text: body.to_string(),
            letterhead: Letterhead::default(),
        }
    }

    #[test]
    fn test_render_pdf_produces_pdf_bytes() {
        let doc = render_pdf(
            &request("EXECUTIVE SUMMARY\n\nWe deliver on time."),
            &default_page_style(),
        )
        .unwrap();
        assert_eq!(doc.kind(), DocumentKind::Pdf);
        assert!(!doc.bytes().is_empty());
        assert!(doc.bytes().starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_pdf_never_fails_on_awkward_input() {
        let long_word = "SUPERCALIFRAGILISTICEXPIALIDOCIOUS".repeat(20);
        let many_pages = "PARAGRAPH\nbody line\n\n".repeat(300);
        let bodies: [&str; 6] = [
            "x",
            "\n\n\n",
            "# \n##\n**\n",
            "Ünïcödé “quotes” — dashes • bullets 价格",
            &long_word,
            &many_pages,
        ];
        for body in bodies {
            let doc = render_pdf(&request(body), &default_page_style()).unwrap();
            assert!(!doc.bytes().is_empty(), "empty output for {body:?}");
        }
    }

    #[test]
    fn test_long_body_is_larger_than_short_body() {
        let style = default_page_style();
        let short = render_pdf(&request("One line."), &style).unwrap();
        let long = render_pdf(&request(&"Many lines of text.\n".repeat(400)), &style).unwrap();
        assert!(long.bytes().len() > short.bytes().len());
    }
}
