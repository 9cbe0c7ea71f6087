// Shared prompt fragments and template filling.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting pieces.

/// Output-format instruction appended to every drafting prompt. The document
/// renderer recognises ALL CAPS lines as headings and blank lines as paragraph
/// breaks, so the model is asked to produce exactly that.
pub const PLAIN_TEXT_FORMAT_INSTRUCTION: &str = "\
    FORMAT: Respond in plain text only. Put each section heading on its own line \
    in ALL CAPS. Separate paragraphs with a single blank line. \
    Do NOT use markdown (no #, no **, no tables). \
    Do NOT add any commentary before or after the document.";

/// Fills `{key}` placeholders in a single pass.
///
/// Substituted values are never re-scanned, so user input containing `{...}`
/// is inserted verbatim. Unknown placeholders are left as-is.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let substituted = after_open.find('}').and_then(|close| {
            let key = &after_open[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (close, *v))
        });
        match substituted {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}
