//! Document plan: every piece of text and every rule, positioned on its page.
//!
//! `plan_document` is pure and CPU-only; the PDF writer replays the plan
//! without making any layout decisions of its own.
//!
//! # Flow
//! 1. Letterhead block (first page only), closed by a horizontal rule.
//! 2. Title, upper-cased and centered.
//! 3. Body, line by line: classify → wrap → place, starting a new page once
//!    the cursor passes `bottom_limit_mm`.

use serde::{Deserialize, Serialize};

use crate::layout::classify::{classify_line, heading_text, LineKind};
use crate::layout::font_metrics::{get_metrics, FontWeight};
use crate::layout::letterhead::{place_centered, place_letterhead, Segment};
use crate::layout::normalize::{normalize_for_builtin_font, strip_emphasis};
use crate::layout::page::{PageStyle, TextStyle};
use crate::layout::wrap::wrap_text;
use crate::models::document::DocumentRequest;

// ────────────────────────────────────────────────────────────────────────────
// Plan types
// ────────────────────────────────────────────────────────────────────────────

/// What a placed run of text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineRole {
    Letterhead,
    Title,
    Heading,
    Body,
}

/// A run of text at a fixed position. `baseline_mm` is measured from the top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedText {
    pub text: String,
    pub x_mm: f32,
    pub baseline_mm: f32,
    pub size_pt: f32,
    pub weight: FontWeight,
    pub role: LineRole,
}

/// A horizontal rule. `y_mm` is measured from the top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRule {
    pub x1_mm: f32,
    pub x2_mm: f32,
    pub y_mm: f32,
    pub thickness_pt: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagePlan {
    pub texts: Vec<PlacedText>,
    pub rules: Vec<PlacedRule>,
}

/// The full layout of one document. Always holds at least one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPlan {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub pages: Vec<PagePlan>,
}

impl DocumentPlan {
    /// Heading and body lines in reading order, excluding letterhead and title.
    pub fn content_lines(&self) -> impl Iterator<Item = &PlacedText> {
        self.pages
            .iter()
            .flat_map(|p| p.texts.iter())
            .filter(|t| matches!(t.role, LineRole::Heading | LineRole::Body))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Planning
// ────────────────────────────────────────────────────────────────────────────

/// Vertical cursor over a growing list of pages.
struct PageCursor<'a> {
    style: &'a PageStyle,
    pages: Vec<PagePlan>,
    y: f32,
}

impl<'a> PageCursor<'a> {
    fn new(style: &'a PageStyle) -> Self {
        Self {
            style,
            pages: vec![PagePlan::default()],
            y: style.top_mm,
        }
    }

    fn current(&mut self) -> &mut PagePlan {
        // pages is never empty
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn break_if_full(&mut self) {
        if self.y > self.style.bottom_limit_mm {
            self.pages.push(PagePlan::default());
            self.y = self.style.top_mm;
        }
    }

    fn place_left(&mut self, text: String, text_style: &TextStyle, role: LineRole) {
        self.break_if_full();
        let placed = PlacedText {
            text,
            x_mm: self.style.left_margin_mm,
            baseline_mm: self.y,
            size_pt: text_style.size_pt,
            weight: text_style.weight,
            role,
        };
        self.current().texts.push(placed);
        self.y += self.style.line_height_mm;
    }
}

/// Lays out a document request onto A4 pages.
pub fn plan_document(request: &DocumentRequest, style: &PageStyle) -> DocumentPlan {
    let mut cursor = PageCursor::new(style);

    let letterhead = place_letterhead(&request.letterhead, style);
    cursor.current().texts.extend(letterhead.texts);
    cursor.current().rules.push(letterhead.rule);
    cursor.y = letterhead.next_y;

    place_title(&mut cursor, &request.title);

    for raw_line in request.body_text.lines() {
        let line = strip_emphasis(&normalize_for_builtin_font(raw_line));
        if line.trim().is_empty() {
            cursor.break_if_full();
            cursor.y += style.line_height_mm;
            continue;
        }

        match classify_line(&line, &style.heading_rules) {
            LineKind::Heading => {
                let text = heading_text(&line, &style.heading_rules);
                place_wrapped(&mut cursor, text, &style.heading, LineRole::Heading);
                cursor.y += style.heading.space_after_mm;
            }
            LineKind::Body => {
                place_wrapped(&mut cursor, &line, &style.body, LineRole::Body);
                cursor.y += style.body.space_after_mm;
            }
        }
    }

    DocumentPlan {
        page_width_mm: style.page_width_mm,
        page_height_mm: style.page_height_mm,
        pages: cursor.pages,
    }
}

fn place_title(cursor: &mut PageCursor<'_>, title: &str) {
    let style = cursor.style;
    let title = normalize_for_builtin_font(title.trim()).to_uppercase();
    let metrics = get_metrics(style.title.weight);
    let lines = wrap_text(&title, metrics, style.title.size_pt, style.text_width_mm);
    if lines.is_empty() {
        return;
    }
    for line in lines {
        cursor.break_if_full();
        let segment = [Segment::new(line, style.title.weight)];
        let mut placed = place_centered(&segment, style.title.size_pt, cursor.y, style);
        for text in &mut placed {
            text.role = LineRole::Title;
        }
        cursor.current().texts.extend(placed);
        cursor.y += style.line_height_mm;
    }
    cursor.y += style.title.space_after_mm;
}

fn place_wrapped(
    cursor: &mut PageCursor<'_>,
    text: &str,
    text_style: &TextStyle,
    role: LineRole,
) {
    let metrics = get_metrics(text_style.weight);
    let lines = wrap_text(
        text,
        metrics,
        text_style.size_pt,
        cursor.style.text_width_mm,
    );
    for line in lines {
        cursor.place_left(line, text_style, role);
    }
}
