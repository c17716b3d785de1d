//! Field rules for projects.
//!
//! The database schema backstops the hard invariants (unique non-empty
//! slug); these checks exist to reject bad input with a readable
//! message before it reaches a constraint.

use crate::error::CoreError;
use crate::slug::slugify;

/// Maximum stored title length, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum stored slug length, in characters.
pub const SLUG_MAX_CHARS: usize = 220;

/// Accent color applied when a project does not set one.
pub const DEFAULT_ACCENT_COLOR: &str = "#111827";

/// Maximum stored accent color length, in characters.
pub const ACCENT_COLOR_MAX_CHARS: usize = 7;

/// Titles must be non-blank and fit the column.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// Explicit slugs must already be canonical: exactly what [`slugify`]
/// would produce.
///
/// Stored slugs are matched verbatim against the one-segment detail
/// route, so uppercase, spaces, or `/` would leave a project without a
/// reachable detail page. Such values are rejected, never rewritten.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("slug must not be empty".into()));
    }
    if slug.chars().count() > SLUG_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "slug must be at most {SLUG_MAX_CHARS} characters"
        )));
    }
    if slugify(slug) != slug {
        return Err(CoreError::Validation(
            "slug must be lowercase letters and digits separated by single hyphens".into(),
        ));
    }
    Ok(())
}

/// Descriptions must be non-blank.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "description must not be empty".into(),
        ));
    }
    Ok(())
}

/// Accent colors must be non-empty and fit the column.
///
/// Only length is checked. The column is 7 characters wide, enough for
/// a `#`-prefixed hex triplet, and anything that fits is accepted.
pub fn validate_accent_color(color: &str) -> Result<(), CoreError> {
    if color.is_empty() {
        return Err(CoreError::Validation(
            "accent_color must not be empty".into(),
        ));
    }
    if color.chars().count() > ACCENT_COLOR_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "accent_color must be at most {ACCENT_COLOR_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_rules() {
        assert!(validate_title("Night Skyline").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(200)).is_ok());
        assert!(validate_title(&"x".repeat(201)).is_err());
    }

    #[test]
    fn slug_rules() {
        assert!(validate_slug("night-skyline").is_ok());
        assert!(validate_slug("apollo-11").is_ok());
        assert!(validate_slug("ночная-стена").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Night-Skyline").is_err());
        assert!(validate_slug("night skyline").is_err());
        assert!(validate_slug("night/skyline").is_err());
        assert!(validate_slug("-night-skyline-").is_err());
        assert!(validate_slug("night--skyline").is_err());
        assert!(validate_slug(&"a".repeat(220)).is_ok());
        assert!(validate_slug(&"a".repeat(221)).is_err());
    }

    #[test]
    fn description_rules() {
        assert!(validate_description("A wall project.").is_ok());
        assert!(validate_description(" \n ").is_err());
    }

    #[test]
    fn accent_color_rules() {
        assert!(validate_accent_color(DEFAULT_ACCENT_COLOR).is_ok());
        assert!(validate_accent_color("#fff").is_ok());
        assert!(validate_accent_color("tomato").is_ok());
        assert!(validate_accent_color("").is_err());
        assert!(validate_accent_color("#1118270").is_err());
    }
}
