//! Slug derivation for project titles.
//!
//! A slug is the URL-safe identifier a project is addressed by
//! (`/p/{slug}/`). It is derived once when the project is created and
//! never regenerated, so published URLs survive title edits.

/// Derive a URL-safe slug from a title.
///
/// Lowercases the input, collapses every run of non-alphanumeric
/// characters into a single `-`, and trims separators from both ends.
/// Unicode letters and digits are kept, so non-Latin titles still
/// produce usable slugs.
///
/// A title with no alphanumeric characters at all derives an empty
/// slug; callers must reject that before persisting (stored slugs are
/// non-empty).
///
/// # Examples
///
/// ```
/// use wall_core::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Spaced   out  "), "spaced-out");
/// assert_eq!(slugify("Ночная стена"), "ночная-стена");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }
    slug
}
