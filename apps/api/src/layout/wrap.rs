//! Greedy word-wrap against the static font metrics.
//!
//! No hyphenation: a word wider than the available width is placed on a line
//! of its own and allowed to overflow.

use crate::layout::font_metrics::FontMetricTable;

/// Wraps `text` into lines no wider than `max_width_mm` at `size_pt`.
///
/// Whitespace runs collapse to single spaces. Blank input returns no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    wrap_text_with_first_width(text, metrics, size_pt, max_width_mm, max_width_mm)
}

/// Like `wrap_text`, but the first line gets its own width. Used when the first
/// line shares its row with a label.
pub fn wrap_text_with_first_width(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    first_width_mm: f32,
    rest_width_mm: f32,
) -> Vec<String> {
    let space_w = metrics.space_mm(size_pt);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.measure_mm(word, size_pt);
        let max_width = if lines.is_empty() {
            first_width_mm
        } else {
            rest_width_mm
        };

        if !current.is_empty() && current_width + space_w + word_w > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_width += space_w;
        }
        current.push_str(word);
        current_width += word_w;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
