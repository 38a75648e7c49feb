/// Marker appended when text is cut inside a sentence.
pub const ELLIPSIS: &str = "…";

const SENTENCE_END: [char; 3] = ['.', '!', '?'];

/// Shortens `text` to at most `limit` characters without splitting a sentence
/// or a word where possible.
///
/// Cuts after the last sentence terminator (followed by whitespace) within the
/// limit, else before the
/// last space (appending [`ELLIPSIS`]), else hard at the limit (appending
/// [`ELLIPSIS`]). Text that already fits is returned unchanged. Lengths are
/// counted in characters.
pub fn shorten(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    // Byte offset just past the `limit`-th character
    let window_end = text
        .char_indices()
        .nth(limit)
        .map_or(text.len(), |(idx, _)| idx);
    let window = &text[..window_end];

    // A terminator only ends a sentence when whitespace follows, which rules
    // out decimals and host names. Terminators are single-byte.
    let sentence_end = window
        .match_indices(SENTENCE_END)
        .map(|(idx, _)| idx)
        .filter(|&idx| text[idx + 1..].chars().next().is_none_or(char::is_whitespace))
        .last();
    if let Some(idx) = sentence_end {
        return text[..=idx].to_string();
    }

    if text[window_end..].starts_with(char::is_whitespace) {
        return format!("{}{ELLIPSIS}", window.trim_end());
    }

    if let Some(idx) = window.rfind(' ') {
        return format!("{}{ELLIPSIS}", window[..idx].trim_end());
    }

    format!("{window}{ELLIPSIS}")
}
