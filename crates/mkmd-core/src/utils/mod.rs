pub mod html;

/// Characters that may not appear in a file system entry name on this platform.
#[cfg(windows)]
pub fn is_invalid_file_name_char(c: char) -> bool {
    matches!(c, '"' | '<' | '>' | '|' | ':' | '*' | '?' | '\\' | '/') || (c as u32) < 32
}

/// Characters that may not appear in a file system entry name on this platform.
#[cfg(not(windows))]
pub fn is_invalid_file_name_char(c: char) -> bool {
    matches!(c, '\0' | '/')
}

/// Take the first `max_chars` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
