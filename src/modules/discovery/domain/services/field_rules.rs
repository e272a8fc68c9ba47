//! Defaults and fallbacks shared by every backend mapper

pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const UNTITLED_EVENT: &str = "Untitled event";
/// Characters kept before the ellipsis
pub const DESCRIPTION_LIMIT: usize = 150;
const ELLIPSIS: &str = "...";

/// Short-form address first, then the full one, then the placeholder.
/// Blank strings count as missing.
pub fn resolve_address(short_form: Option<&str>, full: Option<&str>) -> String {
    [short_form, full]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .map_or_else(|| ADDRESS_NOT_AVAILABLE.to_string(), str::to_string)
}

/// Lengths are counted in characters, so multi-byte text is never split
pub fn truncate_description(text: Option<&str>) -> String {
    match text.filter(|t| !t.is_empty()) {
        None => NO_DESCRIPTION.to_string(),
        Some(text) if text.chars().count() > DESCRIPTION_LIMIT => {
            let mut truncated: String = text.chars().take(DESCRIPTION_LIMIT).collect();
            truncated.push_str(ELLIPSIS);
            truncated
        }
        Some(text) => text.to_string(),
    }
}

/// `Some` only for non-blank text
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
