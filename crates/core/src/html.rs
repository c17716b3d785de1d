//! Text helpers for server-rendered HTML.

/// Escape `&`, `<`, `>`, `"` and `'` for safe interpolation into
/// element bodies and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape `text` and turn line breaks into `<br>` tags, preserving the
/// line structure of free-form descriptions.
pub fn linebreaksbr(text: &str) -> String {
    escape(text).replace("\r\n", "<br>").replace('\n', "<br>")
}
