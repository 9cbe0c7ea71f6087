pub mod brief;
pub mod document;
pub mod letterhead;

/// Trimmed value of an optional text field, or `None` if absent or blank.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
