/// Trims a candidate label. Blank or whitespace-only input is rejected.
pub fn normalize_label(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
