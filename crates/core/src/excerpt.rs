//! Word-boundary excerpts for project descriptions.

/// Default maximum excerpt length, in characters.
pub const DEFAULT_EXCERPT_CHARS: usize = 200;

/// Truncate `text` to at most `max_chars` characters, cutting at the
/// last space inside the limit and appending `"..."`. Text already
/// within the limit is returned unchanged, without an ellipsis.
///
/// Counts characters, not bytes, so multibyte text never splits mid
/// character. When the truncated prefix contains no space at all the
/// whole prefix is kept before the ellipsis rather than returning
/// nothing.
///
/// # Examples
///
/// ```
/// use wall_core::excerpt::excerpt;
///
/// assert_eq!(excerpt("The quick brown fox", 10), "The quick...");
/// assert_eq!(excerpt("short", 10), "short");
/// ```
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let byte_end = text
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let prefix = &text[..byte_end];
    let cut = match prefix.rfind(' ') {
        Some(last_space) => &prefix[..last_space],
        None => prefix,
    };
    format!("{cut}...")
}
