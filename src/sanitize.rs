/// Strips a leading and a trailing markdown code fence from provider output
/// and trims surrounding whitespace. The opening fence may carry a language
/// hint (```html, ```jsx, ...). Interior content is never altered, and the
/// function is idempotent.
pub fn strip_code_fences(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(after) = text.strip_prefix("```") {
        // Skip the optional language hint glued to the opening fence.
        text = after.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    }
    if let Some(before) = text.strip_suffix("```") {
        text = before;
    }

    text.trim().to_string()
}
