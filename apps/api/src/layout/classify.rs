//! Heading classification for body text lines.
//!
//! Classification is purely lexical: a line is a heading when it carries a
//! marker prefix, or when it is short, has no surrounding whitespace and is
//! entirely upper-case. All-caps prose that happens to be short is therefore
//! styled as a heading too; callers get no signal that this happened.

use serde::{Deserialize, Serialize};

/// How a source line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Heading,
    Body,
}

/// Data-driven rules for heading detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRules {
    /// Inclusive lower bound on an all-caps heading, in characters.
    pub min_chars: usize,
    /// Inclusive upper bound on an all-caps heading, in characters.
    pub max_chars: usize,
    /// Prefixes that force a heading regardless of case, e.g. `#` for markdown.
    pub markers: Vec<String>,
}

impl Default for HeadingRules {
    fn default() -> Self {
        Self {
            min_chars: 4,
            max_chars: 49,
            markers: vec!["#".to_string()],
        }
    }
}

/// Classifies a single source line.
pub fn classify_line(line: &str, rules: &HeadingRules) -> LineKind {
    if strip_marker(line, rules).is_some() || is_caps_heading(line, rules) {
        LineKind::Heading
    } else {
        LineKind::Body
    }
}

/// Text to print for a heading line: marker and surrounding whitespace removed.
pub fn heading_text<'a>(line: &'a str, rules: &HeadingRules) -> &'a str {
    strip_marker(line, rules).unwrap_or_else(|| line.trim())
}

/// Returns the remainder after a marker prefix, if the line has one and the
/// remainder is not empty.
fn strip_marker<'a>(line: &'a str, rules: &HeadingRules) -> Option<&'a str> {
    let trimmed = line.trim();
    rules
        .markers
        .iter()
        .filter(|m| !m.is_empty())
        .find_map(|marker| {
            if !trimmed.starts_with(marker.as_str()) {
                return None;
            }
            let rest = trimmed.trim_start_matches(marker.as_str()).trim();
            (!rest.is_empty()).then_some(rest)
        })
}

fn is_caps_heading(line: &str, rules: &HeadingRules) -> bool {
    if line != line.trim() {
        return false;
    }
    let len = line.chars().count();
    if len < rules.min_chars || len > rules.max_chars {
        return false;
    }
    line.to_uppercase() == line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineKind {
        classify_line(line, &HeadingRules::default())
    }

    #[test]
    fn test_all_caps_section_title_is_heading() {
        assert_eq!(classify("EXECUTIVE SUMMARY"), LineKind::Heading);
        assert_eq!(classify("NEXT STEPS"), LineKind::Heading);
    }

    #[test]
    fn test_mixed_case_is_body() {
        assert_eq!(classify("Executive Summary"), LineKind::Body);
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert_eq!(classify("ABC"), LineKind::Body, "3 chars is too short");
        assert_eq!(classify("ABCD"), LineKind::Heading, "4 chars is the minimum");
        let at_max = "A".repeat(49);
        let over_max = "A".repeat(50);
        assert_eq!(classify(&at_max), LineKind::Heading);
        assert_eq!(classify(&over_max), LineKind::Body);
    }

    #[test]
    fn test_surrounding_whitespace_is_body() {
        assert_eq!(classify("  TIMELINE"), LineKind::Body);
        assert_eq!(classify("TIMELINE "), LineKind::Body);
    }

    #[test]
    fn test_caseless_lines_within_bounds_are_headings() {
        // Digits and punctuation are unchanged by upper-casing.
        assert_eq!(classify("2025-2026"), LineKind::Heading);
        assert_eq!(classify("-----"), LineKind::Heading);
        assert_eq!(classify("$75,000"), LineKind::Heading);
        assert_eq!(classify("1234"), LineKind::Heading);
        assert_eq!(classify("123"), LineKind::Body, "still bounded by min_chars");
    }

    #[test]
    fn test_caps_with_digits_and_punctuation_is_heading() {
        assert_eq!(classify("1. SCOPE OF WORK"), LineKind::Heading);
        assert_eq!(classify("PHASE 2: DELIVERY"), LineKind::Heading);
    }

    #[test]
    fn test_marker_prefix_is_heading_and_stripped() {
        let rules = HeadingRules::default();
        assert_eq!(classify("## Our Approach"), LineKind::Heading);
        assert_eq!(heading_text("## Our Approach", &rules), "Our Approach");
        assert_eq!(heading_text("  # Timeline  ", &rules), "Timeline");
    }

    #[test]
    fn test_bare_marker_is_body() {
        assert_eq!(classify("#"), LineKind::Body);
        assert_eq!(classify("###"), LineKind::Body);
    }

    #[test]
    fn test_rules_are_data() {
        let rules = HeadingRules {
            min_chars: 2,
            max_chars: 10,
            markers: vec![],
        };
        assert_eq!(classify_line("OK", &rules), LineKind::Heading);
        assert_eq!(classify_line("# Intro", &rules), LineKind::Body);
        assert_eq!(classify_line("DELIVERABLES", &rules), LineKind::Body);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let lines = ["INVESTMENT", "The fee is fixed.", "# Terms", "TERMS "];
        let first: Vec<LineKind> = lines.iter().map(|l| classify(l)).collect();
        let second: Vec<LineKind> = lines.iter().map(|l| classify(l)).collect();
        assert_eq!(first, second);
    }
}
