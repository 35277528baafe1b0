//! Path-segment normalization for artist, album and playlist names

/// Maximum length (in characters) of a normalized segment
pub const MAX_SEGMENT_CHARS: usize = 40;

/// Characters not permitted in Windows file names
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Make free text safe to use as a single path segment
///
/// - Every run of reserved characters becomes one `_`
/// - The result is cut to the first 40 characters
/// - Leading and trailing whitespace is removed
/// - A result made only of dots (`.`, `..`) becomes `_`
pub fn normalize_name(text: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if is_reserved(c) {
            if !in_run {
                replaced.push('_');
            }
            in_run = true;
        } else {
            replaced.push(c);
            in_run = false;
        }
    }

    let truncated: String = replaced.chars().take(MAX_SEGMENT_CHARS).collect();
    let trimmed = truncated.trim();

    // "." and ".." would resolve outside the artist/album directory
    if !trimmed.is_empty() && trimmed.chars().all(|c| c == '.') {
        return "_".to_string();
    }
    trimmed.to_string()
}
