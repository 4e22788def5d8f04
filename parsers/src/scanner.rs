fn is_field_delimiter(ch: char) -> bool {
    ch.is_ascii_whitespace()
}

/// Returns the leading piece-placement field of `text`: everything up to the
/// first whitespace character, or all of `text` if there is none.
pub fn placement_field(text: &str) -> &str {
    match text.find(is_field_delimiter) {
        None => text,
        Some(end) => &text[..end],
    }
}
