//! Letterhead block placement.
//!
//! Each row is measured with the static metrics and centered on the page as a
//! whole, so bold labels and regular values line up as one visual line. The
//! address is wrapped to `address_width_mm` and every wrapped line is centered
//! on its own.

use crate::layout::font_metrics::{get_metrics, FontWeight};
use crate::layout::normalize::normalize_for_builtin_font;
use crate::layout::page::PageStyle;
use crate::layout::plan::{LineRole, PlacedRule, PlacedText};
use crate::layout::wrap::wrap_text_with_first_width;
use crate::models::letterhead::{LabeledField, Letterhead};

const SEPARATOR: &str = " | ";
const EMAIL_LABEL: &str = "Email";
const ADDRESS_LABEL: &str = "Address: ";

/// A run of text sharing one weight within a centered row.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub weight: FontWeight,
}

impl Segment {
    pub fn new(text: impl Into<String>, weight: FontWeight) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// The placed letterhead plus the cursor position where the document continues.
#[derive(Debug, Clone)]
pub struct LetterheadBlock {
    pub texts: Vec<PlacedText>,
    pub rule: PlacedRule,
    pub next_y: f32,
}

/// Lays out the letterhead starting at the page's top baseline.
pub fn place_letterhead(letterhead: &Letterhead, style: &PageStyle) -> LetterheadBlock {
    let mut texts = Vec::new();
    let mut y = style.top_mm;
    let details_size = style.letterhead_details_size_pt;

    if let Some(name) = letterhead.company_name() {
        let name = normalize_for_builtin_font(name);
        let segments = [Segment::new(name, style.company_name.weight)];
        texts.extend(place_centered(&segments, style.company_name.size_pt, y, style));
        y += style.line_height_mm + style.company_name.space_after_mm;
    }

    let primary = labeled_segments(&letterhead.primary_details());
    if !primary.is_empty() {
        texts.extend(place_centered(&primary, details_size, y, style));
        y += style.line_height_mm;
    }

    if let Some(email) = letterhead.email() {
        let segments = labeled_segments(&[LabeledField {
            label: EMAIL_LABEL,
            value: email,
        }]);
        texts.extend(place_centered(&segments, details_size, y, style));
        y += style.line_height_mm;
    }

    if let Some(address) = letterhead.address() {
        let regular = get_metrics(FontWeight::Regular);
        let label_width = get_metrics(FontWeight::Bold).measure_mm(ADDRESS_LABEL, details_size);
        let address = normalize_for_builtin_font(address);
        let lines = wrap_text_with_first_width(
            &address,
            regular,
            details_size,
            (style.address_width_mm - label_width).max(0.0),
            style.address_width_mm,
        );
        for (i, line) in lines.into_iter().enumerate() {
            let mut segments = Vec::with_capacity(2);
            if i == 0 {
                segments.push(Segment::new(ADDRESS_LABEL, FontWeight::Bold));
            }
            segments.push(Segment::new(line, FontWeight::Regular));
            texts.extend(place_centered(&segments, details_size, y, style));
            y += style.line_height_mm;
        }
    }

    y += style.space_before_rule_mm;
    let rule = PlacedRule {
        x1_mm: style.rule_start_mm,
        x2_mm: style.rule_end_mm,
        y_mm: y,
        thickness_pt: style.rule_thickness_pt,
    };
    y += style.space_after_rule_mm;

    LetterheadBlock {
        texts,
        rule,
        next_y: y,
    }
}

/// Places a row of segments centered horizontally at `baseline_mm`.
/// Rows wider than the page start at the left edge.
pub fn place_centered(
    segments: &[Segment],
    size_pt: f32,
    baseline_mm: f32,
    style: &PageStyle,
) -> Vec<PlacedText> {
    let total: f32 = segments
        .iter()
        .map(|s| get_metrics(s.weight).measure_mm(&s.text, size_pt))
        .sum();
    let mut x = ((style.page_width_mm - total) / 2.0).max(0.0);

    segments
        .iter()
        .map(|segment| {
            let placed = PlacedText {
                text: segment.text.clone(),
                x_mm: x,
                baseline_mm,
                size_pt,
                weight: segment.weight,
                role: LineRole::Letterhead,
            };
            x += get_metrics(segment.weight).measure_mm(&segment.text, size_pt);
            placed
        })
        .collect()
}

/// `Label: value | Label: value` with bold labels.
fn labeled_segments(fields: &[LabeledField<'_>]) -> Vec<Segment> {
    let mut segments = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            segments.push(Segment::new(SEPARATOR, FontWeight::Regular));
        }
        segments.push(Segment::new(
            format!("{}: ", normalize_for_builtin_font(field.label)),
            FontWeight::Bold,
        ));
        segments.push(Segment::new(
            normalize_for_builtin_font(field.value),
            FontWeight::Regular,
        ));
    }
    segments
}
