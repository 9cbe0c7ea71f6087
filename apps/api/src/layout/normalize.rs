//! Text clean-up before layout.
//!
//! The PDF writer uses non-embedded built-in faces, which only cover printable
//! ASCII reliably. Model output routinely contains typographic quotes, dashes,
//! bullets and accented names, so every string headed for the PDF passes
//! through `normalize_for_builtin_font` first.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Substitute for characters with no ASCII approximation.
const REPLACEMENT: char = '?';

/// Folds a line of text onto printable ASCII.
pub fn normalize_for_builtin_font(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            if c == '\t' {
                out.push(' ');
            } else if !c.is_ascii_control() {
                out.push(c);
            }
            continue;
        }
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2022}' | '\u{2023}' | '\u{2043}' | '\u{25AA}' | '\u{25CF}' | '\u{00B7}' => {
                out.push('-')
            }
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\u{2002}'..='\u{200A}' | '\u{202F}' => out.push(' '),
            '\u{200B}' | '\u{FEFF}' => {}
            _ => fold_char(c, &mut out),
        }
    }
    out
}

/// Removes markdown strong-emphasis markers (`**`), which models add even when
/// asked for plain text.
pub fn strip_emphasis(text: &str) -> String {
    text.replace("**", "")
}

fn fold_char(c: char, out: &mut String) {
    let folded: String = std::iter::once(c)
        .nfkd()
        .filter(|d| !is_combining_mark(*d))
        .filter(|d| d.is_ascii() && !d.is_ascii_control())
        .collect();
    if folded.is_empty() {
        out.push(REPLACEMENT);
    } else {
        out.push_str(&folded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let text = "Pricing: $75,000 - $95,000 (50% upfront)";
        assert_eq!(normalize_for_builtin_font(text), text);
    }

    #[test]
    fn test_typographic_punctuation_is_folded() {
        assert_eq!(
            normalize_for_builtin_font("\u{201C}Client\u{201D} \u{2014} the party\u{2019}s agent\u{2026}"),
            "\"Client\" - the party's agent..."
        );
    }

    #[test]
    fn test_bullets_become_dashes() {
        assert_eq!(normalize_for_builtin_font("\u{2022} Discovery"), "- Discovery");
    }

    #[test]
    fn test_accents_are_folded() {
        assert_eq!(normalize_for_builtin_font("Café São Paulo"), "Cafe Sao Paulo");
    }

    #[test]
    fn test_unmappable_characters_are_replaced() {
        assert_eq!(normalize_for_builtin_font("价格"), "??");
    }

    #[test]
    fn test_control_characters_are_dropped_and_tabs_spaced() {
        assert_eq!(normalize_for_builtin_font("a\tb\u{0007}c"), "a bc");
    }

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_emphasis("**Total:** $10,000"), "Total: $10,000");
    }
}
