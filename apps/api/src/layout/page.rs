//! Page geometry and text styles for the PDF layout.
//!
//! All distances are millimetres measured from the top-left corner of the page;
//! the PDF writer flips the vertical axis when it replays a plan.

use serde::{Deserialize, Serialize};

use crate::layout::classify::HeadingRules;
use crate::layout::font_metrics::FontWeight;

/// A4 portrait.
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Size, weight and trailing space for one kind of line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size_pt: f32,
    pub weight: FontWeight,
    /// Extra vertical space after the last line of a block, on top of the line height.
    pub space_after_mm: f32,
}

/// Layout parameters for the generated PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageStyle {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Baseline of the first line on every page.
    pub top_mm: f32,
    /// A new page starts once the cursor passes this line.
    pub bottom_limit_mm: f32,
    pub left_margin_mm: f32,
    /// Printable width for title, headings and body.
    pub text_width_mm: f32,
    pub line_height_mm: f32,

    pub company_name: TextStyle,
    pub letterhead_details_size_pt: f32,
    /// The address is wrapped narrower than the body so it never clips at the right edge.
    pub address_width_mm: f32,
    pub space_before_rule_mm: f32,
    pub space_after_rule_mm: f32,
    pub rule_start_mm: f32,
    pub rule_end_mm: f32,
    pub rule_thickness_pt: f32,

    pub title: TextStyle,
    pub heading: TextStyle,
    pub body: TextStyle,
    pub heading_rules: HeadingRules,
}

/// Returns the default page style: A4 portrait, Helvetica, 25mm left margin
/// with a 140mm text column.
pub fn default_page_style() -> PageStyle {
    PageStyle {
        page_width_mm: A4_WIDTH_MM,
        page_height_mm: A4_HEIGHT_MM,
        top_mm: 20.0,
        bottom_limit_mm: 270.0,
        left_margin_mm: 25.0,
        text_width_mm: 140.0,
        line_height_mm: 7.0,

        company_name: TextStyle {
            size_pt: 16.0,
            weight: FontWeight::Bold,
            space_after_mm: 8.0,
        },
        letterhead_details_size_pt: 8.0,
        address_width_mm: 110.0,
        space_before_rule_mm: 12.0,
        space_after_rule_mm: 15.0,
        rule_start_mm: 25.0,
        rule_end_mm: 185.0,
        rule_thickness_pt: 0.5,

        title: TextStyle {
            size_pt: 14.0,
            weight: FontWeight::Bold,
            space_after_mm: 5.0,
        },
        heading: TextStyle {
            size_pt: 14.0,
            weight: FontWeight::Bold,
            space_after_mm: 3.0,
        },
        body: TextStyle {
            size_pt: 10.0,
            weight: FontWeight::Regular,
            space_after_mm: 0.0,
        },
        heading_rules: HeadingRules::default(),
    }
}
